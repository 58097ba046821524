//! Manifest group selection.

use std::fmt;

/// Built-in manifest groups selected by `--production`, `--development`
/// and `--test`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentGroup {
    Production,
    Development,
    Test,
}

impl EnvironmentGroup {
    /// Group name as written in the manifest.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for EnvironmentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combine environment flags and custom groups into the active group list.
///
/// Development is implied when no environment flag is set. Custom groups
/// follow the environments; blanks and repeats are dropped.
///
/// # Example
///
/// ```
/// use gom::config::{select_groups, EnvironmentGroup};
///
/// let groups = select_groups(&[], &["ci".to_string()]);
/// assert_eq!(groups, ["development", "ci"]);
///
/// let groups = select_groups(&[EnvironmentGroup::Test], &[]);
/// assert_eq!(groups, ["test"]);
/// ```
pub fn select_groups(environments: &[EnvironmentGroup], custom: &[String]) -> Vec<String> {
    let implied = [EnvironmentGroup::Development];
    let environments = if environments.is_empty() {
        &implied[..]
    } else {
        environments
    };

    let mut selected: Vec<String> = Vec::new();
    let names = environments
        .iter()
        .map(|env| env.as_str().to_string())
        .chain(custom.iter().map(|g| g.trim().to_string()));

    for name in names {
        if !name.is_empty() && !selected.contains(&name) {
            selected.push(name);
        }
    }
    selected
}
