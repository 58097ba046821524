//! Interrupt forwarding to the wrapped child.
//!
//! A single process-wide handler is installed before the first child is
//! spawned. While a [`SupervisedChild`] is alive every interrupt gom
//! receives is sent on to it; gom itself keeps waiting and exits with the
//! child's status. With no child running, an interrupt exits gom with 130.
//!
//! The handler runs on ctrlc's own thread, not in signal context, so the
//! registration is a plain mutex. Spawning holds it, which makes an
//! interrupt that lands mid-spawn wait for the pid instead of exiting
//! over a fresh child. On Unix the pid is deregistered before the child
//! is reaped, so a recycled pid is never signalled.

use crate::error::{GomError, Result};
use std::io;
use std::process::{Child, Command, ExitStatus};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Pid of the supervised child, if any.
static SUPERVISED: Mutex<Option<u32>> = Mutex::new(None);

static HANDLER: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Exit status used when gom is interrupted with no child running.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

fn registration() -> MutexGuard<'static, Option<u32>> {
    SUPERVISED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn deregister(pid: u32) {
    let mut slot = registration();
    if *slot == Some(pid) {
        *slot = None;
    }
}

/// Install the interrupt handler. Safe to call repeatedly.
pub fn install_forwarder() -> Result<()> {
    HANDLER
        .get_or_init(|| ctrlc::set_handler(on_interrupt).map_err(|e| e.to_string()))
        .clone()
        .map_err(|e| GomError::Other(anyhow::anyhow!("failed to install interrupt handler: {e}")))
}

fn on_interrupt() {
    let slot = registration();
    match *slot {
        None => std::process::exit(INTERRUPTED_EXIT_CODE),
        Some(pid) => {
            tracing::debug!("forwarding interrupt to child {}", pid);
            forward_interrupt(pid);
        }
    }
}

#[cfg(unix)]
fn forward_interrupt(pid: u32) {
    let Ok(pid) = libc::pid_t::try_from(pid) else {
        return;
    };
    // SAFETY: kill(2) has no memory-safety preconditions.
    unsafe {
        libc::kill(pid, libc::SIGINT);
    }
}

// Console Ctrl+C events already reach every process attached to the console.
#[cfg(not(unix))]
fn forward_interrupt(_pid: u32) {}

/// Block until `pid` has exited, leaving it unreaped.
#[cfg(unix)]
fn wait_for_exit(pid: u32) -> io::Result<()> {
    loop {
        // SAFETY: siginfo_t is plain old data; waitid only writes into it.
        let mut info: libc::siginfo_t = unsafe { std::mem::zeroed() };
        let rc = unsafe {
            libc::waitid(
                libc::P_PID,
                pid as libc::id_t,
                &mut info,
                libc::WEXITED | libc::WNOWAIT,
            )
        };
        if rc == 0 {
            return Ok(());
        }
        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(err);
        }
    }
}

/// A spawned child registered for interrupt forwarding.
///
/// Dropping it without [`wait`](Self::wait) kills and reaps the child, so
/// no exit path leaves an orphan or a stale registration behind.
#[derive(Debug)]
pub struct SupervisedChild {
    child: Option<Child>,
    pid: u32,
}

impl SupervisedChild {
    /// Spawn `command` and register it for forwarding.
    ///
    /// A failed spawn leaves nothing registered.
    pub fn spawn(command: &mut Command) -> io::Result<Self> {
        let mut slot = registration();
        let child = command.spawn()?;
        let pid = child.id();
        *slot = Some(pid);
        Ok(Self {
            child: Some(child),
            pid,
        })
    }

    /// Block until the child exits.
    pub fn wait(mut self) -> io::Result<ExitStatus> {
        let Some(child) = self.child.as_mut() else {
            return Err(io::Error::other("child already reaped"));
        };

        #[cfg(unix)]
        wait_for_exit(self.pid)?;
        deregister(self.pid);

        let status = child.wait()?;
        self.child = None;
        Ok(status)
    }
}

impl Drop for SupervisedChild {
    fn drop(&mut self) {
        match self.child.take() {
            Some(mut child) => {
                let _ = child.kill();
                deregister(self.pid);
                let _ = child.wait();
            }
            None => deregister(self.pid),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn supervised_pid() -> Option<u32> {
        *registration()
    }

    #[test]
    fn install_is_idempotent() {
        assert!(install_forwarder().is_ok());
        assert!(install_forwarder().is_ok());
    }

    #[test]
    fn wait_reports_status() {
        let child = SupervisedChild::spawn(Command::new("/bin/sh").args(["-c", "exit 3"])).unwrap();
        assert!(child.pid > 0);
        let status = child.wait().unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn wait_reports_signal_exit() {
        use std::os::unix::process::ExitStatusExt;

        let child =
            SupervisedChild::spawn(Command::new("/bin/sh").args(["-c", "kill -TERM $$"])).unwrap();
        let status = child.wait().unwrap();
        assert_eq!(status.signal(), Some(libc::SIGTERM));
    }

    #[test]
    fn drop_kills_unwaited_child() {
        let child = SupervisedChild::spawn(&mut Command::new("sleep").arg("30")).unwrap();
        let pid = child.pid;
        drop(child);

        // Reaped, so the pid no longer names a process.
        // SAFETY: signal 0 only checks for existence.
        let alive = unsafe { libc::kill(pid as libc::pid_t, 0) } == 0;
        assert!(!alive);
        assert_ne!(supervised_pid(), Some(pid));
    }

    #[test]
    fn registration_cleared_after_wait() {
        let child = SupervisedChild::spawn(&mut Command::new("true")).unwrap();
        let pid = child.pid;
        child.wait().unwrap();
        assert_ne!(supervised_pid(), Some(pid));
    }

    #[test]
    fn failed_spawn_is_an_error() {
        let err = SupervisedChild::spawn(&mut Command::new("/nonexistent/gom-test-binary"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
