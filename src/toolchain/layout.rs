//! Dependency directory naming.

use super::vendoring::VendoringSupport;
use std::env::VarError;
use std::path::{Path, PathBuf};

/// Directory the toolchain scans natively.
pub const NATIVE_VENDOR_DIR: &str = "vendor";

/// Default dependency directory when gom emulates vendoring via `GOPATH`.
pub const DEFAULT_VENDOR_DIR: &str = "_vendor";

/// Overrides [`DEFAULT_VENDOR_DIR`].
pub const VENDOR_NAME_VAR: &str = "GOM_VENDOR_NAME";

/// Where dependencies live and how the toolchain finds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorLayout {
    /// Directory name relative to the project root.
    pub base_name: String,
    /// Whether the toolchain reads `base_name` directly.
    pub native: bool,
}

impl VendorLayout {
    /// Derive the layout, reading the override through `env_fn`.
    ///
    /// # Example
    ///
    /// ```
    /// use gom::toolchain::{VendorLayout, VendoringSupport};
    ///
    /// let override_libs = |_: &str| -> Result<String, std::env::VarError> { Ok("libs".to_string()) };
    /// let layout = VendorLayout::resolve(VendoringSupport { native: false }, override_libs);
    /// assert_eq!(layout.source_subpath(), std::path::PathBuf::from("libs/src"));
    /// ```
    pub fn resolve<F>(support: VendoringSupport, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        if support.native {
            return Self {
                base_name: NATIVE_VENDOR_DIR.to_string(),
                native: true,
            };
        }

        let base_name = env_fn(VENDOR_NAME_VAR)
            .ok()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_VENDOR_DIR.to_string());

        Self {
            base_name,
            native: false,
        }
    }

    /// Directory package sources are materialized into.
    ///
    /// Without native support the dependency directory doubles as a
    /// `GOPATH` root, so sources go under its `src/`.
    pub fn source_subpath(&self) -> PathBuf {
        if self.native {
            PathBuf::from(&self.base_name)
        } else {
            Path::new(&self.base_name).join("src")
        }
    }

    /// Absolute dependency directory for a project.
    pub fn root_in(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.base_name)
    }
}
