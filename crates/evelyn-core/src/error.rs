//! # Error Types
//!
//! Construction-time validation failures for the core newtypes. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Nothing in the helper surface returns these: they only surface when a
//! registry is being built or deserialized.

use thiserror::Error;

/// A value failed validation while constructing a core type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Jurisdiction codes are exactly two uppercase ASCII letters.
    #[error("invalid jurisdiction code {0:?}: expected two uppercase ASCII letters")]
    InvalidJurisdictionCode(String),

    /// Product codes are non-empty lowercase ASCII alphanumerics.
    #[error("invalid product code {0:?}: expected lowercase ASCII letters or digits")]
    InvalidProductCode(String),

    /// A validation pattern did not compile.
    #[error("invalid validation pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern source text.
        pattern: String,
        /// Compiler diagnostic from the regex engine.
        reason: String,
    },
}
