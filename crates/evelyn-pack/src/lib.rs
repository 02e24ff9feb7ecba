//! # evelyn-pack: Jurisdiction Reference Data
//!
//! Encodes everything a Fact Find or Account Application journey needs to
//! know about a jurisdiction as typed, serializable records:
//!
//! - **Configuration records** (`config.rs`): currency, address and tax-ID
//!   formats, tax rate tables, regulatory text, product availability,
//!   terminology, and wealth/income bands.
//!
//! - **Built-in packs** (`united_kingdom.rs`, `ireland.rs`): the two
//!   supported jurisdictions, with county lists in `counties.rs`.
//!
//! - **ESG screening** (`esg.rs`): the shared priority areas, exclusions and
//!   allocation options. Not jurisdiction-specific.
//!
//! - **Registry** (`registry.rs`): the read-only code-to-record mapping, built
//!   in or loaded from YAML.
//!
//! ## Crate Policy
//!
//! - Depends only on `evelyn-core` internally.
//! - Reference data is constructed once and never mutated.
//! - Rate tables are stored, never evaluated. There is no tax arithmetic here.

pub mod config;
pub mod counties;
pub mod error;
pub mod esg;
pub mod ireland;
pub mod registry;
pub mod united_kingdom;

pub use config::{
    AddressConfig, Band, CapitalGainsRate, CurrencyConfig, Disclosures, EsgFlags,
    JurisdictionConfig, ProductConfig, ProductVisibility, RegulatoryConfig, ResidentialRates,
    TaxIdConfig, TaxRateBand, TaxTables, Terminology,
};
pub use counties::{IRISH_COUNTIES, UK_COUNTIES};
pub use error::{PackError, PackResult};
pub use esg::{EsgConfig, EsgExclusion, EsgPriorityArea};
pub use registry::{JurisdictionRegistry, DEFAULT_JURISDICTION};
