//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use crate::config::{select_groups, EnvironmentGroup};
use clap::{Parser, Subcommand};

/// gom - Go toolchain wrapper with project-local dependencies.
#[derive(Debug, Parser)]
#[command(name = "gom")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Production environment
    #[arg(long)]
    pub production: bool,

    /// Development environment (default)
    #[arg(long)]
    pub development: bool,

    /// Test environment
    #[arg(long)]
    pub test: bool,

    /// Do not move dependencies from vendor/src to vendor/
    #[arg(long)]
    pub project_mode: bool,

    /// Comma-separated list of Gomfile groups
    #[arg(long, value_delimiter = ',', value_name = "GROUPS")]
    pub groups: Vec<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse `argv`, keeping passthrough arguments exactly as typed.
    ///
    /// clap consumes the first `--` after a subcommand, but `go` gives it
    /// meaning (`go run main.go -- -flag`), so the wrapped command's
    /// arguments are taken from `argv` itself once parsing succeeds.
    pub fn try_parse_verbatim<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let raw: Vec<String> = argv.into_iter().map(Into::into).collect();
        let mut cli = Self::try_parse_from(&raw)?;

        if let Some(passthrough) = cli.command.passthrough_mut() {
            if let Some(pos) = subcommand_position(&raw) {
                passthrough.args = raw[pos + 1..].to_vec();
            }
        }
        Ok(cli)
    }

    /// Active manifest groups for this run.
    pub fn selected_groups(&self) -> Vec<String> {
        let environments: Vec<EnvironmentGroup> = [
            (self.production, EnvironmentGroup::Production),
            (self.development, EnvironmentGroup::Development),
            (self.test, EnvironmentGroup::Test),
        ]
        .into_iter()
        .filter_map(|(set, group)| set.then_some(group))
        .collect();

        select_groups(&environments, &self.groups)
    }
}

/// Index of the subcommand token in `raw`, skipping global flags.
fn subcommand_position(raw: &[String]) -> Option<usize> {
    let mut i = 1;
    while let Some(arg) = raw.get(i) {
        if arg == "--groups" {
            i += 2;
        } else if arg.starts_with('-') {
            i += 1;
        } else {
            return Some(i);
        }
    }
    None
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build with vendored packages
    #[command(visible_alias = "b", disable_help_flag = true)]
    Build(PassthroughArgs),

    /// Run tests with vendored packages
    #[command(visible_alias = "t", disable_help_flag = true)]
    Test(PassthroughArgs),

    /// Run a Go file with vendored packages
    #[command(visible_alias = "r", disable_help_flag = true)]
    Run(PassthroughArgs),

    /// Run godoc with vendored packages
    #[command(visible_alias = "d", disable_help_flag = true)]
    Doc(PassthroughArgs),

    /// Execute a command with the vendored environment
    #[command(visible_alias = "e", disable_help_flag = true)]
    Exec(ExecArgs),

    /// Run go tool
    #[command(disable_help_flag = true)]
    Tool(PassthroughArgs),

    /// Run go env
    #[command(disable_help_flag = true)]
    Env(PassthroughArgs),

    /// Run go fmt
    #[command(disable_help_flag = true)]
    Fmt(PassthroughArgs),

    /// Run go list
    #[command(disable_help_flag = true)]
    List(PassthroughArgs),

    /// Run go vet
    #[command(disable_help_flag = true)]
    Vet(PassthroughArgs),

    /// Install Gomfile packages into the vendor directory
    #[command(visible_alias = "i", disable_help_flag = true)]
    Install(PassthroughArgs),

    /// Update all dependencies
    #[command(visible_alias = "u")]
    Update,

    /// Generate project files
    #[command(visible_alias = "g")]
    Gen(GenArgs),

    /// Generate Gomfile.lock
    #[command(visible_alias = "l")]
    Lock,
}

impl Commands {
    /// Subcommand name as typed on the command line (aliases normalized).
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Build(_) => "build",
            Commands::Test(_) => "test",
            Commands::Run(_) => "run",
            Commands::Doc(_) => "doc",
            Commands::Exec(_) => "exec",
            Commands::Tool(_) => "tool",
            Commands::Env(_) => "env",
            Commands::Fmt(_) => "fmt",
            Commands::List(_) => "list",
            Commands::Vet(_) => "vet",
            Commands::Install(_) => "install",
            Commands::Update => "update",
            Commands::Gen(_) => "gen",
            Commands::Lock => "lock",
        }
    }

    /// Raw trailing arguments, for subcommands that forward them.
    pub fn passthrough_mut(&mut self) -> Option<&mut PassthroughArgs> {
        match self {
            Commands::Build(a)
            | Commands::Test(a)
            | Commands::Run(a)
            | Commands::Doc(a)
            | Commands::Tool(a)
            | Commands::Env(a)
            | Commands::Fmt(a)
            | Commands::List(a)
            | Commands::Vet(a)
            | Commands::Install(a) => Some(a),
            Commands::Exec(_) | Commands::Update | Commands::Gen(_) | Commands::Lock => None,
        }
    }
}

/// Arguments handed to the wrapped program untouched.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PassthroughArgs {
    /// Arguments for the wrapped command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `exec` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExecArgs {
    /// Program followed by its arguments
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub argv: Vec<String>,
}

/// Arguments for the `gen` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GenArgs {
    #[command(subcommand)]
    pub target: GenTarget,
}

/// Files `gen` can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum GenTarget {
    /// Generate .travis.yml which uses "gom test"
    TravisYml,

    /// Scan packages from the current directory and generate a Gomfile
    Gomfile,
}
