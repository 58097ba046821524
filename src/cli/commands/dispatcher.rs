//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Commands, GenTarget};
use crate::config::Settings;
use crate::error::{GomError, Result};
use crate::exec::{Invocation, DOC_PROGRAM};

use super::gen::TravisYmlCommand;
use super::passthrough::PassthroughCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// What a subcommand turns into.
#[derive(Debug, PartialEq, Eq)]
pub enum Plan {
    /// Run a program in the vendored environment.
    Run(Invocation),
    /// Write `.travis.yml`.
    GenerateTravisYml,
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher over resolved settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Decide what a subcommand does without running anything.
    pub fn plan(&self, command: &Commands) -> Result<Plan> {
        let toolchain = |sub: &str, args: &[String]| -> Result<Plan> {
            Ok(Plan::Run(
                Invocation::toolchain(sub, args).with_env(self.settings.overlay.clone()),
            ))
        };

        match command {
            Commands::Build(a) => toolchain("build", &a.args),
            Commands::Test(a) => toolchain("test", &a.args),
            Commands::Run(a) => toolchain("run", &a.args),
            Commands::Tool(a) => toolchain("tool", &a.args),
            Commands::Env(a) => toolchain("env", &a.args),
            Commands::Fmt(a) => toolchain("fmt", &a.args),
            Commands::List(a) => toolchain("list", &a.args),
            Commands::Vet(a) => toolchain("vet", &a.args),
            Commands::Doc(a) => Ok(Plan::Run(
                Invocation::program(DOC_PROGRAM, a.args.clone())
                    .with_env(self.settings.overlay.clone()),
            )),
            Commands::Exec(a) => Ok(Plan::Run(
                Invocation::new(a.argv.iter().cloned())?.with_env(self.settings.overlay.clone()),
            )),
            Commands::Gen(a) if a.target == GenTarget::TravisYml => Ok(Plan::GenerateTravisYml),
            Commands::Gen(_) => Err(GomError::Unsupported {
                command: "gen gomfile".to_string(),
            }),
            Commands::Install(_) | Commands::Update | Commands::Lock => {
                Err(GomError::Unsupported {
                    command: command.name().to_string(),
                })
            }
        }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, command: &Commands) -> Result<CommandResult> {
        tracing::debug!("dispatching {}", command.name());
        match self.plan(command)? {
            Plan::Run(invocation) => PassthroughCommand::new(invocation).execute(),
            Plan::GenerateTravisYml => TravisYmlCommand::new(&self.settings.project_root).execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{ExecArgs, GenArgs, PassthroughArgs};
    use crate::exec::GROUPS_VAR;
    use crate::toolchain::VendorLayout;
    use std::ffi::OsString;
    use std::path::PathBuf;

    fn dispatcher() -> CommandDispatcher {
        let mut overlay = crate::exec::EnvOverlay::new();
        overlay.insert(GROUPS_VAR.to_string(), OsString::from("development"));
        CommandDispatcher::new(Settings {
            layout: VendorLayout {
                base_name: "vendor".to_string(),
                native: true,
            },
            project_root: PathBuf::from("/work/app"),
            groups: vec!["development".to_string()],
            project_mode: false,
            overlay,
        })
    }

    fn passthrough(args: &[&str]) -> PassthroughArgs {
        PassthroughArgs {
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn argv(plan: Plan) -> Vec<String> {
        match plan {
            Plan::Run(inv) => inv.argv(),
            other => panic!("expected a run plan, got {other:?}"),
        }
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn test_maps_to_go_test_in_order() {
        let plan = dispatcher()
            .plan(&Commands::Test(passthrough(&["-run", "Foo"])))
            .unwrap();
        assert_eq!(argv(plan), ["go", "test", "-run", "Foo"]);
    }

    #[test]
    fn toolchain_subcommands_map_to_go() {
        let d = dispatcher();
        let cases = [
            (Commands::Build(passthrough(&["./..."])), "build"),
            (Commands::Run(passthrough(&["main.go"])), "run"),
            (Commands::Tool(passthrough(&["pprof"])), "tool"),
            (Commands::Env(passthrough(&[])), "env"),
            (Commands::Fmt(passthrough(&[])), "fmt"),
            (Commands::List(passthrough(&[])), "list"),
            (Commands::Vet(passthrough(&[])), "vet"),
        ];
        for (command, sub) in cases {
            let argv = argv(d.plan(&command).unwrap());
            assert_eq!(argv[0], "go");
            assert_eq!(argv[1], sub);
        }
    }

    #[test]
    fn doc_runs_godoc() {
        let plan = dispatcher()
            .plan(&Commands::Doc(passthrough(&["fmt", "Println"])))
            .unwrap();
        assert_eq!(argv(plan), ["godoc", "fmt", "Println"]);
    }

    #[test]
    fn exec_runs_argv_verbatim() {
        let command = Commands::Exec(ExecArgs {
            argv: vec!["make".to_string(), "-j4".to_string()],
        });
        assert_eq!(argv(dispatcher().plan(&command).unwrap()), ["make", "-j4"]);
    }

    #[test]
    fn run_plans_carry_overlay() {
        match dispatcher().plan(&Commands::Build(passthrough(&[]))).unwrap() {
            Plan::Run(inv) => assert_eq!(inv.env[GROUPS_VAR], OsString::from("development")),
            other => panic!("expected a run plan, got {other:?}"),
        }
    }

    #[test]
    fn gen_travis_yml_is_planned() {
        let command = Commands::Gen(GenArgs {
            target: GenTarget::TravisYml,
        });
        assert_eq!(dispatcher().plan(&command).unwrap(), Plan::GenerateTravisYml);
    }

    #[test]
    fn installer_commands_are_unsupported() {
        let d = dispatcher();
        for command in [
            Commands::Install(passthrough(&[])),
            Commands::Update,
            Commands::Lock,
            Commands::Gen(GenArgs {
                target: GenTarget::Gomfile,
            }),
        ] {
            assert!(matches!(
                d.plan(&command),
                Err(GomError::Unsupported { .. })
            ));
        }
    }
}
