//! Execution environment for wrapped toolchain commands.
//!
//! - [`invocation`] - What to run
//! - [`environment`] - `GOPATH`/`PATH` rewiring and project root discovery
//! - [`path`] - Executable lookup
//! - [`process`] - Spawning with inherited stdio and waiting
//! - [`signal`] - Interrupt forwarding to the child

pub mod environment;
pub mod invocation;
pub mod path;
pub mod process;
pub mod signal;

pub use crate::toolchain::TOOLCHAIN;
pub use environment::{
    build_overlay_with_env, find_project_root, EnvOverlay, GROUPS_VAR, MANIFEST_FILE,
};
pub use invocation::Invocation;
pub use path::{is_executable, resolve_program};
pub use process::{run, ExecutionResult};
pub use signal::{install_forwarder, SupervisedChild, INTERRUPTED_EXIT_CODE};

/// Program run by `gom doc`.
pub const DOC_PROGRAM: &str = "godoc";
