//! Running an invocation attached to gom's own terminal.

use super::invocation::Invocation;
use super::path::resolve_program;
use super::signal::{install_forwarder, SupervisedChild};
use crate::error::{GomError, Result};
use std::process::{Command, ExitStatus, Stdio};

/// How a wrapped child finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Terminating signal, Unix only.
    pub signal: Option<i32>,
}

impl ExecutionResult {
    /// Result for a child that exited normally.
    pub fn exited(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            signal: None,
        }
    }

    /// Result for a child killed by a signal.
    pub fn signaled(signal: i32) -> Self {
        Self {
            exit_code: None,
            signal: Some(signal),
        }
    }

    fn from_status(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = {
            use std::os::unix::process::ExitStatusExt;
            status.signal()
        };
        #[cfg(not(unix))]
        let signal = None;

        Self {
            exit_code: status.code(),
            signal,
        }
    }

    /// Whether the child exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Status gom should exit with: the child's own code, or 1 if it had none.
    pub fn wrapper_exit_code(&self) -> i32 {
        self.exit_code.unwrap_or(1)
    }
}

/// Run an invocation to completion.
///
/// The child shares gom's stdin, stdout, stderr and working directory and
/// sees the inherited environment with the invocation's overlay on top.
/// A non-zero exit is a normal [`ExecutionResult`], not an error.
pub fn run(invocation: &Invocation) -> Result<ExecutionResult> {
    let search_path = invocation
        .env
        .get("PATH")
        .cloned()
        .or_else(|| std::env::var_os("PATH"));
    let resolved = resolve_program(&invocation.program, search_path.as_deref())?;

    install_forwarder()?;

    let mut command = Command::new(&resolved);
    command
        .args(&invocation.args)
        .envs(&invocation.env)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.arg0(&invocation.program);
    }

    tracing::debug!(
        "running {} as {:?}",
        resolved.display(),
        invocation.argv()
    );

    let child = SupervisedChild::spawn(&mut command).map_err(|source| GomError::Spawn {
        program: resolved.display().to_string(),
        source,
    })?;
    let status = child.wait()?;

    let result = ExecutionResult::from_status(status);
    tracing::debug!("{} finished: {:?}", invocation.program, result);
    Ok(result)
}
