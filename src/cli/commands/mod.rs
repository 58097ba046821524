//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which first turns a
//! CLI subcommand into a [`Plan`] and then runs it. Wrapped toolchain
//! commands share one implementation, [`PassthroughCommand`].

pub mod dispatcher;
pub mod gen;
pub mod passthrough;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, Plan};
pub use gen::TravisYmlCommand;
pub use passthrough::PassthroughCommand;
