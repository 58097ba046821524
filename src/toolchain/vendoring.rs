//! Version-banded native vendoring policy.
//!
//! Go's handling of project-local `vendor/` directories changed across
//! releases (see <https://golang.org/doc/go1.6#go_command>):
//!
//! | Toolchain          | Native vendoring                             |
//! |--------------------|----------------------------------------------|
//! | `< 1.5.0`          | never                                        |
//! | `1.5.0 ..< 1.6.0`  | only with `GO15VENDOREXPERIMENT=1`           |
//! | `1.6.0 ..< 1.7.3`  | unless `GO15VENDOREXPERIMENT=0`              |
//! | `>= 1.7.3`         | always                                       |
//!
//! The table lives in [`VENDORING_BANDS`]; new releases that move the
//! boundary get a new row rather than a new branch.

use super::version::{parse_toolchain_version, VersionProbe};
use crate::error::Result;
use semver::Version;
use std::env::VarError;

/// Environment flag consulted by the 1.5 and 1.6 bands.
pub const VENDOR_EXPERIMENT_VAR: &str = "GO15VENDOREXPERIMENT";

/// How a band decides whether the toolchain vendors natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandPolicy {
    /// No native vendoring.
    Never,
    /// Native vendoring only when `var` is set to exactly `value`.
    OptIn {
        var: &'static str,
        value: &'static str,
    },
    /// Native vendoring unless `var` is set to exactly `value`.
    OptOut {
        var: &'static str,
        value: &'static str,
    },
    /// Native vendoring regardless of the environment.
    Always,
}

impl BandPolicy {
    /// Evaluate the policy against an environment lookup.
    pub fn evaluate<F>(&self, env_fn: &F) -> bool
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        match *self {
            BandPolicy::Never => false,
            BandPolicy::OptIn { var, value } => env_fn(var).is_ok_and(|v| v == value),
            BandPolicy::OptOut { var, value } => !env_fn(var).is_ok_and(|v| v == value),
            BandPolicy::Always => true,
        }
    }
}

/// One row of the vendoring table: versions strictly below `below` use `policy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendoringBand {
    /// Exclusive upper bound; `None` for the open-ended last band.
    pub below: Option<Version>,
    pub policy: BandPolicy,
}

/// Ordered vendoring bands, lowest first.
pub const VENDORING_BANDS: &[VendoringBand] = &[
    VendoringBand {
        below: Some(Version::new(1, 5, 0)),
        policy: BandPolicy::Never,
    },
    VendoringBand {
        below: Some(Version::new(1, 6, 0)),
        policy: BandPolicy::OptIn {
            var: VENDOR_EXPERIMENT_VAR,
            value: "1",
        },
    },
    VendoringBand {
        below: Some(Version::new(1, 7, 3)),
        policy: BandPolicy::OptOut {
            var: VENDOR_EXPERIMENT_VAR,
            value: "0",
        },
    },
    VendoringBand {
        below: None,
        policy: BandPolicy::Always,
    },
];

/// Whether the installed toolchain understands `vendor/` on its own.
///
/// When false, gom emulates vendoring by putting the dependency directory
/// on `GOPATH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendoringSupport {
    pub native: bool,
}

/// Find the band governing `version`.
pub fn band_for(version: &Version) -> &'static VendoringBand {
    VENDORING_BANDS
        .iter()
        .find(|band| band.below.as_ref().is_none_or(|below| version < below))
        .unwrap_or(&VENDORING_BANDS[VENDORING_BANDS.len() - 1])
}

/// Decide native vendoring support from a raw toolchain version.
///
/// An absent or empty version means the toolchain could not be identified
/// (not installed, or an alternate front-end such as gccgo) and is treated
/// as a modern toolchain. A version that is present but malformed is an error.
pub fn vendoring_support_for<F>(raw_version: Option<&str>, env_fn: &F) -> Result<bool>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    let raw = match raw_version.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            tracing::debug!("toolchain version unknown, assuming native vendoring");
            return Ok(true);
        }
    };

    let version = parse_toolchain_version(raw)?;
    let band = band_for(&version);
    let native = band.policy.evaluate(env_fn);
    tracing::debug!(
        "toolchain {} falls in band {:?}, native vendoring: {}",
        version,
        band.policy,
        native
    );
    Ok(native)
}

/// Probe the toolchain and resolve its vendoring support.
///
/// Call once at startup and pass the result along; nothing here is cached.
pub fn resolve_vendoring_support<P, F>(probe: &P, env_fn: &F) -> Result<VendoringSupport>
where
    P: VersionProbe + ?Sized,
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    let raw = probe.version();
    let native = vendoring_support_for(raw.as_deref(), env_fn)?;
    Ok(VendoringSupport { native })
}
