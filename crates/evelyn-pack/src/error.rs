//! # Pack Errors
//!
//! Failures while building or loading a jurisdiction registry. These only
//! occur at configuration load: once a registry exists, every lookup
//! against it is infallible.

use std::path::PathBuf;

use evelyn_core::{JurisdictionCode, ValidationError};
use thiserror::Error;

/// Errors from registry construction and YAML loading.
#[derive(Error, Debug)]
pub enum PackError {
    /// A code or pattern in the reference data is malformed.
    #[error("invalid reference data: {0}")]
    Validation(#[from] ValidationError),

    /// The registry document did not parse.
    #[error("registry YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The registry file could not be read.
    #[error("failed to read registry {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The registry has no jurisdictions at all.
    #[error("registry contains no jurisdictions")]
    Empty,

    /// Two records share a code.
    #[error("duplicate jurisdiction code {0}")]
    DuplicateCode(JurisdictionCode),

    /// Resolution needs a fallback that is always present.
    #[error("registry does not contain the default jurisdiction {0}")]
    MissingDefault(JurisdictionCode),
}

/// Result alias for pack operations.
pub type PackResult<T> = Result<T, PackError>;
