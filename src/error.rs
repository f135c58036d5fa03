//! Error types for Pinion
//!
//! Uses `thiserror` for library errors. Every variant is fatal at this
//! tool's scope: one diagnostic, exit status 1, no retry.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Pinion operations
pub type PinResult<T> = Result<T, PinError>;

/// Main error type for Pinion operations
#[derive(Error, Debug)]
pub enum PinError {
    /// Input manifest absent - the resolve step has not been run
    #[error("unable to locate {path}: you must run the resolve step before pinning")]
    MissingManifest { path: PathBuf },

    /// Input manifest exists but is not a JSON object
    #[error("malformed manifest {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Manifest key does not match `<prefix>/<owner>-<name>@<version>`
    #[error("malformed dependency key '{key}': {reason}")]
    MalformedIdentifier { key: String, reason: String },

    /// Existing lockfile cannot be parsed as a JSON object
    #[error("refusing to merge into {path}: {message}")]
    MalformedLockfile { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
