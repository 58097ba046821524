//! Error types for gom operations.
//!
//! This module defines [`GomError`], the primary error type used throughout
//! the wrapper, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - An unknown toolchain is not an error; the resolver falls back to native vendoring
//! - A toolchain that reports a malformed version is fatal
//! - A child that exits non-zero is reported through
//!   [`ExecutionResult`](crate::exec::ExecutionResult), never as an error

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gom operations.
#[derive(Debug, Error)]
pub enum GomError {
    /// The toolchain reported a version string that is not a semantic version.
    #[error("toolchain reported an invalid semantic version: {version}")]
    VersionUnparsable { version: String },

    /// The program to execute is not on the search path.
    #[error("executable not found: {program}")]
    ExecutableNotFound { program: String },

    /// The OS refused to start the program.
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid command-line usage.
    #[error("{message}")]
    Usage { message: String },

    /// The subcommand belongs to the package installer, which is not part of this binary.
    #[error("'{command}' is handled by the package installer and is not available in this build")]
    Unsupported { command: String },

    /// A file gom would generate already exists.
    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gom operations.
pub type Result<T> = std::result::Result<T, GomError>;
