//! Toolchain compatibility resolution.
//!
//! Detects which dependency-resolution convention the installed Go
//! toolchain supports and derives the dependency directory from it.
//!
//! - [`version`] - Probing and parsing `go version`
//! - [`vendoring`] - Version-banded native vendoring policy
//! - [`layout`] - Dependency directory naming

pub mod layout;
pub mod vendoring;
pub mod version;

pub use layout::{VendorLayout, DEFAULT_VENDOR_DIR, NATIVE_VENDOR_DIR, VENDOR_NAME_VAR};
pub use vendoring::{
    band_for, resolve_vendoring_support, vendoring_support_for, BandPolicy, VendoringBand,
    VendoringSupport, VENDORING_BANDS, VENDOR_EXPERIMENT_VAR,
};
pub use version::{
    extract_version_token, parse_toolchain_version, GoVersionProbe, VersionProbe, TOOLCHAIN,
};
