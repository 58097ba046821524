//! Environment overlay for wrapped commands.
//!
//! Without native vendoring the dependency directory is put in front of
//! `GOPATH`, so `<vendor>/src/<import path>` resolves like any other
//! workspace package, and `<vendor>/bin` is appended to `PATH` so tools
//! installed there can be run. The selected manifest groups are exported
//! as `GOM_GROUPS` either way.

use crate::error::{GomError, Result};
use crate::toolchain::VendorLayout;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Variables layered over the inherited environment.
pub type EnvOverlay = BTreeMap<String, OsString>;

/// Manifest that marks a project root.
pub const MANIFEST_FILE: &str = "Gomfile";

/// Comma-separated manifest groups exported to child processes.
pub const GROUPS_VAR: &str = "GOM_GROUPS";

/// Build the overlay, reading inherited variables through `env_fn`.
pub fn build_overlay_with_env<F>(
    layout: &VendorLayout,
    project_root: &Path,
    groups: &[String],
    env_fn: F,
) -> Result<EnvOverlay>
where
    F: Fn(&str) -> Option<OsString>,
{
    let mut overlay = EnvOverlay::new();

    if !layout.native {
        let vendor = layout.root_in(project_root);

        let gopath = prepend_path(&vendor, env_fn("GOPATH"))?;
        let path = append_path(env_fn("PATH"), &vendor.join("bin"))?;
        tracing::debug!("GOPATH={}", gopath.to_string_lossy());

        overlay.insert("GOPATH".to_string(), gopath);
        overlay.insert("PATH".to_string(), path);
    }

    overlay.insert(GROUPS_VAR.to_string(), OsString::from(groups.join(",")));
    Ok(overlay)
}

fn split_inherited(value: Option<OsString>) -> Vec<PathBuf> {
    value
        .map(|v| {
            std::env::split_paths(&v)
                .filter(|p| !p.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn prepend_path(first: &Path, inherited: Option<OsString>) -> Result<OsString> {
    let mut entries = vec![first.to_path_buf()];
    entries.extend(split_inherited(inherited));
    join(entries)
}

fn append_path(inherited: Option<OsString>, last: &Path) -> Result<OsString> {
    let mut entries = split_inherited(inherited);
    entries.push(last.to_path_buf());
    join(entries)
}

fn join(entries: Vec<PathBuf>) -> Result<OsString> {
    std::env::join_paths(entries)
        .map_err(|e| GomError::Other(anyhow::anyhow!("cannot build search path: {e}")))
}

/// Walk up from `start` to the nearest directory holding a `Gomfile`.
///
/// Falls back to `start` when no ancestor has one.
pub fn find_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(MANIFEST_FILE).is_file())
        .unwrap_or(start)
        .to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn emulated() -> VendorLayout {
        VendorLayout {
            base_name: "_vendor".to_string(),
            native: false,
        }
    }

    fn native() -> VendorLayout {
        VendorLayout {
            base_name: "vendor".to_string(),
            native: true,
        }
    }

    fn joined(parts: &[&Path]) -> OsString {
        std::env::join_paths(parts).unwrap()
    }

    #[test]
    fn emulated_layout_prepends_gopath() {
        let root = Path::new("/work/app");
        let overlay = build_overlay_with_env(&emulated(), root, &[], |key: &str| match key {
            "GOPATH" => Some(OsString::from("/home/me/go")),
            _ => None,
        })
        .unwrap();

        assert_eq!(
            overlay["GOPATH"],
            joined(&[root.join("_vendor").as_path(), Path::new("/home/me/go")])
        );
    }

    #[test]
    fn emulated_layout_without_inherited_gopath() {
        let root = Path::new("/work/app");
        let overlay = build_overlay_with_env(&emulated(), root, &[], |_: &str| None).unwrap();

        assert_eq!(overlay["GOPATH"], root.join("_vendor").into_os_string());
        assert_eq!(overlay["PATH"], root.join("_vendor").join("bin").into_os_string());
    }

    #[test]
    fn emulated_layout_appends_vendor_bin_to_path() {
        let root = Path::new("/work/app");
        let overlay = build_overlay_with_env(&emulated(), root, &[], |key: &str| match key {
            "PATH" => Some(joined(&[Path::new("/usr/bin"), Path::new("/bin")])),
            _ => None,
        })
        .unwrap();

        assert_eq!(
            overlay["PATH"],
            joined(&[
                Path::new("/usr/bin"),
                Path::new("/bin"),
                root.join("_vendor").join("bin").as_path(),
            ])
        );
    }

    #[test]
    fn native_layout_leaves_paths_alone() {
        let overlay = build_overlay_with_env(
            &native(),
            Path::new("/work/app"),
            &["development".to_string()],
            |_: &str| Some(OsString::from("/ignored")),
        )
        .unwrap();

        assert!(!overlay.contains_key("GOPATH"));
        assert!(!overlay.contains_key("PATH"));
        assert_eq!(overlay[GROUPS_VAR], OsString::from("development"));
    }

    #[test]
    fn groups_are_comma_joined() {
        let groups = vec!["test".to_string(), "integration".to_string()];
        let overlay =
            build_overlay_with_env(&emulated(), Path::new("/w"), &groups, |_: &str| None)
                .unwrap();
        assert_eq!(overlay[GROUPS_VAR], OsString::from("test,integration"));
    }

    #[test]
    fn find_project_root_walks_up_to_gomfile() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(MANIFEST_FILE), "gom 'github.com/mattn/go-runewidth'\n")
            .unwrap();
        let nested = temp.path().join("cmd").join("tool");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), temp.path());
    }

    #[test]
    fn find_project_root_falls_back_to_start() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("pkg");
        fs::create_dir_all(&nested).unwrap();

        // A Gomfile further up (outside the temp dir) would be found first;
        // the temp dir itself has none.
        let root = find_project_root(&nested);
        assert!(root == nested || root.join(MANIFEST_FILE).is_file());
    }

    #[test]
    fn gomfile_directory_is_not_a_manifest() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(MANIFEST_FILE)).unwrap();
        let root = find_project_root(temp.path());
        assert!(root == temp.path() || root.join(MANIFEST_FILE).is_file());
    }
}
