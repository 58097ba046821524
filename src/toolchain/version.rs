//! Toolchain version probing and parsing.

use crate::error::{GomError, Result};
use regex::Regex;
use semver::{Prerelease, Version};
use std::process::{Command, Stdio};
use std::sync::LazyLock;

/// Program whose `version` subcommand reports the toolchain release.
pub const TOOLCHAIN: &str = "go";

/// `MAJOR[.MINOR[.PATCH]][[-]PRERELEASE]`, after the `go` prefix is stripped.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:-?([0-9A-Za-z][0-9A-Za-z.\-]*))?$")
        .expect("VERSION_REGEX must compile")
});

/// Source of the toolchain's self-reported version string.
///
/// `None` means the toolchain could not be asked (absent binary, failed
/// invocation, unexpected output). That is a normal outcome, not an error.
pub trait VersionProbe {
    /// Report the raw version string, e.g. `go1.9.2`.
    fn version(&self) -> Option<String>;
}

/// Probe that runs `go version`.
#[derive(Debug, Clone)]
pub struct GoVersionProbe {
    program: String,
}

impl GoVersionProbe {
    /// Probe the `go` binary found on `PATH`.
    pub fn new() -> Self {
        Self::with_program(TOOLCHAIN)
    }

    /// Probe a specific toolchain binary.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GoVersionProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionProbe for GoVersionProbe {
    fn version(&self) -> Option<String> {
        let output = Command::new(&self.program)
            .arg("version")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("could not run `{} version`: {}", self.program, e);
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!(
                "`{} version` exited with {:?}",
                self.program,
                output.status.code()
            );
            return None;
        }

        let stdout = String::from_utf8(output.stdout).ok()?;
        extract_version_token(&stdout)
    }
}

/// Pull `go1.9.2` out of `go version go1.9.2 linux/amd64`.
pub fn extract_version_token(output: &str) -> Option<String> {
    output.split_whitespace().nth(2).map(str::to_string)
}

/// Parse a self-reported toolchain version into a semantic version.
///
/// Any leading non-digit prefix (`go`) is dropped and missing minor/patch
/// components are zero-filled, so `go1.9` parses as `1.9.0` and `go1.21rc1`
/// as `1.21.0-rc1`.
///
/// # Example
///
/// ```
/// use gom::toolchain::parse_toolchain_version;
///
/// let v = parse_toolchain_version("go1.7.3").unwrap();
/// assert_eq!(v, semver::Version::new(1, 7, 3));
/// assert!(parse_toolchain_version("devel").is_err());
/// ```
pub fn parse_toolchain_version(raw: &str) -> Result<Version> {
    let unparsable = || GomError::VersionUnparsable {
        version: raw.to_string(),
    };

    let trimmed = raw
        .trim()
        .trim_start_matches(|c: char| !c.is_ascii_digit());
    let caps = VERSION_REGEX.captures(trimmed).ok_or_else(unparsable)?;

    let component = |idx: usize| -> Result<u64> {
        match caps.get(idx) {
            Some(m) => m.as_str().parse().map_err(|_| unparsable()),
            None => Ok(0),
        }
    };

    let mut version = Version::new(component(1)?, component(2)?, component(3)?);
    if let Some(pre) = caps.get(4) {
        version.pre = Prerelease::new(pre.as_str()).map_err(|_| unparsable())?;
    }

    Ok(version)
}
