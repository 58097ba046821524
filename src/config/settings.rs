//! Startup settings.

use crate::error::Result;
use crate::exec::{build_overlay_with_env, find_project_root, EnvOverlay};
use crate::toolchain::{resolve_vendoring_support, VendorLayout, VersionProbe};
use std::env::VarError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Everything resolved once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Dependency directory and how the toolchain finds it.
    pub layout: VendorLayout,

    /// Nearest ancestor with a `Gomfile`, else the working directory.
    pub project_root: PathBuf,

    /// Active manifest groups.
    pub groups: Vec<String>,

    /// Keep `vendor/src` in place instead of migrating to `vendor/`.
    pub project_mode: bool,

    /// Environment layered over every wrapped command.
    pub overlay: EnvOverlay,
}

impl Settings {
    /// Resolve settings from the real process environment.
    pub fn load<P>(probe: &P, cwd: &Path, groups: Vec<String>, project_mode: bool) -> Result<Self>
    where
        P: VersionProbe + ?Sized,
    {
        Self::load_with_env(
            probe,
            cwd,
            groups,
            project_mode,
            |key: &str| std::env::var(key),
            |key: &str| std::env::var_os(key),
        )
    }

    /// Resolve settings with custom environment lookups.
    ///
    /// `env_fn` feeds the vendoring policy and directory override;
    /// `inherited_fn` supplies the `GOPATH`/`PATH` values the overlay extends.
    pub fn load_with_env<P, F, G>(
        probe: &P,
        cwd: &Path,
        groups: Vec<String>,
        project_mode: bool,
        env_fn: F,
        inherited_fn: G,
    ) -> Result<Self>
    where
        P: VersionProbe + ?Sized,
        F: Fn(&str) -> std::result::Result<String, VarError>,
        G: Fn(&str) -> Option<OsString>,
    {
        let support = resolve_vendoring_support(probe, &env_fn)?;
        let layout = VendorLayout::resolve(support, &env_fn);
        let project_root = find_project_root(cwd);
        let overlay = build_overlay_with_env(&layout, &project_root, &groups, inherited_fn)?;

        tracing::debug!(
            "vendor directory {} (native: {}), project root {}, project mode: {}",
            layout.source_subpath().display(),
            layout.native,
            project_root.display(),
            project_mode
        );

        Ok(Self {
            layout,
            project_root,
            groups,
            project_mode,
            overlay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::GROUPS_VAR;
    use crate::GomError;
    use tempfile::TempDir;

    struct FixedProbe(Option<&'static str>);

    impl VersionProbe for FixedProbe {
        fn version(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    fn load(version: Option<&'static str>, env: &[(&str, &str)], cwd: &Path) -> Result<Settings> {
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::load_with_env(
            &FixedProbe(version),
            cwd,
            vec!["development".to_string()],
            false,
            |key: &str| {
                env.iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.clone())
                    .ok_or(VarError::NotPresent)
            },
            |_: &str| None,
        )
    }

    #[test]
    fn go142_uses_underscore_vendor_src() {
        let temp = TempDir::new().unwrap();
        let settings = load(Some("go1.4.2"), &[], temp.path()).unwrap();
        assert!(!settings.layout.native);
        assert_eq!(
            settings.layout.source_subpath(),
            Path::new("_vendor").join("src")
        );
        assert!(settings.overlay.contains_key("GOPATH"));
    }

    #[test]
    fn go150_without_opt_in_is_emulated() {
        let temp = TempDir::new().unwrap();
        let settings = load(Some("go1.5.0"), &[], temp.path()).unwrap();
        assert!(!settings.layout.native);
    }

    #[test]
    fn go150_with_opt_in_is_native() {
        let temp = TempDir::new().unwrap();
        let settings = load(Some("go1.5.0"), &[("GO15VENDOREXPERIMENT", "1")], temp.path()).unwrap();
        assert!(settings.layout.native);
        assert_eq!(settings.layout.source_subpath(), PathBuf::from("vendor"));
        assert!(!settings.overlay.contains_key("GOPATH"));
    }

    #[test]
    fn go190_is_native() {
        let temp = TempDir::new().unwrap();
        let settings = load(Some("go1.9.0"), &[("GOM_VENDOR_NAME", "libs")], temp.path()).unwrap();
        assert_eq!(settings.layout.base_name, "vendor");
    }

    #[test]
    fn unknown_toolchain_is_native() {
        let temp = TempDir::new().unwrap();
        let settings = load(None, &[], temp.path()).unwrap();
        assert!(settings.layout.native);
    }

    #[test]
    fn vendor_name_override_applies_when_emulated() {
        let temp = TempDir::new().unwrap();
        let settings = load(Some("go1.4.2"), &[("GOM_VENDOR_NAME", "libs")], temp.path()).unwrap();
        assert_eq!(settings.layout.source_subpath(), Path::new("libs").join("src"));
    }

    #[test]
    fn malformed_version_leaves_no_settings() {
        let temp = TempDir::new().unwrap();
        let err = load(Some("gone"), &[], temp.path()).unwrap_err();
        assert!(matches!(err, GomError::VersionUnparsable { .. }));
    }

    #[test]
    fn groups_reach_overlay() {
        let temp = TempDir::new().unwrap();
        let settings = load(Some("go1.9.0"), &[], temp.path()).unwrap();
        assert_eq!(settings.overlay[GROUPS_VAR], OsString::from("development"));
    }
}
