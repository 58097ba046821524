//! Wrapped toolchain commands.
//!
//! `gom build`, `gom test`, `gom exec` and friends all end up here: run the
//! planned invocation and hand its exit status back as gom's own.

use crate::error::Result;
use crate::exec::{run, Invocation};

use super::dispatcher::{Command, CommandResult};

/// Runs a single invocation in the vendored environment.
pub struct PassthroughCommand {
    invocation: Invocation,
}

impl PassthroughCommand {
    /// Create a new passthrough command.
    pub fn new(invocation: Invocation) -> Self {
        Self { invocation }
    }
}

impl Command for PassthroughCommand {
    fn execute(&self) -> Result<CommandResult> {
        let result = run(&self.invocation)?;

        if let Some(signal) = result.signal {
            tracing::warn!("{} terminated by signal {}", self.invocation.program, signal);
        }

        if result.success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(result.wrapper_exit_code()))
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn child_exit_code_becomes_result() {
        let inv = Invocation::new(["sh", "-c", "exit 2"]).unwrap();
        let result = PassthroughCommand::new(inv).execute().unwrap();
        assert_eq!(result, CommandResult::failure(2));
    }

    #[test]
    fn successful_child_is_success() {
        let inv = Invocation::new(["true"]).unwrap();
        let result = PassthroughCommand::new(inv).execute().unwrap();
        assert_eq!(result, CommandResult::success());
    }
}
