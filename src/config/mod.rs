//! Process-wide settings for gom.
//!
//! Everything gom needs from its environment is gathered once at startup
//! into a [`Settings`] value and passed explicitly to the dispatcher:
//!
//! - [`groups`] - Manifest group selection from the environment flags
//! - [`settings`] - Toolchain probing, vendor layout, and overlay
//!
//! # Environment Variables
//!
//! | Variable               | Effect                                          |
//! |------------------------|-------------------------------------------------|
//! | `GOM_VENDOR_NAME`      | Dependency directory when `go` lacks vendoring  |
//! | `GO15VENDOREXPERIMENT` | Vendoring opt-in (Go 1.5) / opt-out (Go 1.6)    |
//! | `RUST_LOG`             | Log filter when `--debug` is not given          |

pub mod groups;
pub mod settings;

pub use groups::{select_groups, EnvironmentGroup};
pub use settings::Settings;
