//! # evelyn-core: Foundational Types for the Jurisdiction Toolkit
//!
//! This crate is the leaf of the workspace. It defines the primitives the
//! reference data and the session layer are built from. It depends on no
//! other `evelyn-*` crate.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for codes.** `JurisdictionCode` and `ProductCode`
//!    validate at construction and at deserialization. No bare strings for
//!    registry keys.
//!
//! 2. **Patterns are data.** `ValidationPattern` carries a compiled regex and
//!    its source text, so jurisdiction records can be loaded from YAML and a
//!    new jurisdiction never needs a code change to validate its postcodes.
//!
//! 3. **Formatting never fails.** The number formatter and the option
//!    renderer are total functions. Bad input degrades to zero or to an
//!    empty fragment.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `evelyn-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod code;
pub mod error;
pub mod markup;
pub mod number;
pub mod pattern;

// Re-export primary types for ergonomic imports.
pub use code::{JurisdictionCode, ProductCode};
pub use error::ValidationError;
pub use markup::{escape_html, render_options, OptionEntry};
pub use number::{format_currency, format_en_gb, parse_leading_number, MAX_FRACTION_DIGITS};
pub use pattern::{normalize_identifier, ValidationPattern};
