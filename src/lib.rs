//! gom - Go toolchain wrapper with project-local dependencies.
//!
//! gom runs `go build`, `go test` and the other toolchain subcommands
//! against a dependency directory inside the project instead of the global
//! `GOPATH`. Whether that directory is `vendor/` (read natively by the
//! toolchain) or a secondary `GOPATH` root such as `_vendor/` depends on the
//! installed Go release, so gom asks `go version` once at startup.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and dispatch
//! - [`config`] - Settings resolved once at startup
//! - [`error`] - Error types and result aliases
//! - [`exec`] - Subprocess environment, execution, and interrupt forwarding
//! - [`toolchain`] - Toolchain version detection and vendor layout
//!
//! # Example
//!
//! ```
//! use gom::toolchain::{vendoring_support_for, VendorLayout, VendoringSupport};
//!
//! let no_env = |_: &str| -> Result<String, std::env::VarError> {
//!     Err(std::env::VarError::NotPresent)
//! };
//! let native = vendoring_support_for(Some("go1.4.2"), &no_env).unwrap();
//! assert!(!native);
//!
//! let layout = VendorLayout::resolve(VendoringSupport { native }, no_env);
//! assert_eq!(layout.base_name, "_vendor");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod toolchain;

pub use error::{GomError, Result};
