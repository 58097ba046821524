//! Executable lookup on the search path.

use crate::error::{GomError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    let mut found = vec![dir.join(program)];
    if cfg!(windows) && Path::new(program).extension().is_none() {
        found.push(dir.join(format!("{program}.exe")));
    }
    found
}

/// Resolve `program` to the file that would be executed.
///
/// Names containing a path separator are taken as given (relative to the
/// working directory). Bare names are searched for in each `search_path`
/// entry in order; the first executable file wins.
pub fn resolve_program(program: &str, search_path: Option<&OsStr>) -> Result<PathBuf> {
    let not_found = || GomError::ExecutableNotFound {
        program: program.to_string(),
    };

    if program.is_empty() {
        return Err(not_found());
    }

    let as_path = Path::new(program);
    if as_path.components().count() > 1 || as_path.is_absolute() {
        return if as_path.is_file() {
            Ok(as_path.to_path_buf())
        } else {
            Err(not_found())
        };
    }

    let Some(search_path) = search_path else {
        return Err(not_found());
    };

    std::env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, program))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
        .ok_or_else(not_found)
}
