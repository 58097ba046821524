//! gom CLI entry point.

use std::process::ExitCode;

use console::style;
use gom::cli::{Cli, CommandDispatcher};
use gom::config::Settings;
use gom::toolchain::GoVersionProbe;
use gom::GomError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so wrapped toolchain output on stdout is untouched.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gom=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gom=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn report(err: &GomError) {
    eprintln!("{} {}", style("gom:").red().bold().for_stderr(), err);
}

fn run(cli: &Cli) -> gom::Result<i32> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(
        &GoVersionProbe::new(),
        &cwd,
        cli.selected_groups(),
        cli.project_mode,
    )?;

    let dispatcher = CommandDispatcher::new(settings);
    Ok(dispatcher.dispatch(&cli.command)?.exit_code)
}

fn main() -> ExitCode {
    let argv = std::env::args_os().map(|a| a.to_string_lossy().into_owned());
    let cli = match Cli::try_parse_verbatim(argv) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 1 } else { 0 });
        }
    };
    init_tracing(cli.debug);

    tracing::debug!("gom starting with args: {:?}", cli);

    match run(&cli) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            report(&e);
            ExitCode::from(1)
        }
    }
}
