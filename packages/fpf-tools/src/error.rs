//! Error types for the FPF tools.
//!
//! Every core operation returns [`Result`]; the CLI decides per variant
//! whether a failure aborts the command. Degraded baselines are not errors:
//! they surface as warnings on the assembly outcome.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for the FPF tools library.
#[derive(Debug, Error)]
pub enum FpfError {
    /// A required file (document, part, manifest, profile) does not exist.
    #[error("{what} not found: {}", .path.display())]
    NotFound { what: &'static str, path: PathBuf },

    /// Manifest is not a mapping or lacks a required field.
    #[error("Malformed manifest {}: {reason}", .path.display())]
    MalformedManifest { path: PathBuf, reason: String },

    /// Part list does not match its baseline, or a split does not round-trip.
    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    /// HTTP transport failure while downloading.
    #[error("Failed to download spec from {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("HTTP {status} while downloading {url}")]
    HttpStatus { url: String, status: u16 },

    /// HTTP client construction failed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl FpfError {
    /// Build a [`FpfError::NotFound`] for `path`.
    pub fn not_found(what: &'static str, path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            what,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Build a [`FpfError::MalformedManifest`] for `path`.
    pub fn malformed(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::MalformedManifest {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Map an IO error on `path` to `NotFound` when the file is missing.
    pub fn from_io(what: &'static str, path: impl AsRef<Path>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::not_found(what, path)
        } else {
            Self::Io(err)
        }
    }
}

/// Result type alias for FPF operations.
pub type Result<T> = std::result::Result<T, FpfError>;
