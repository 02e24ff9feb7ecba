//! # Jurisdiction Configuration Records
//!
//! The per-jurisdiction record and its sections. Every field is plain data:
//! labels and messages are display text, patterns are [`ValidationPattern`]
//! values, and tables keep the order in which they are shown to the user.
//!
//! All records derive `Serialize`/`Deserialize` so a registry can be dumped
//! to YAML and loaded back unchanged.

use serde::{Deserialize, Serialize};

use evelyn_core::{JurisdictionCode, OptionEntry, ProductCode, ValidationPattern};

/// Complete configuration for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionConfig {
    /// Registry key.
    pub code: JurisdictionCode,
    /// Display name, e.g. "United Kingdom".
    pub name: String,
    pub currency: CurrencyConfig,
    pub address: AddressConfig,
    pub tax_id: TaxIdConfig,
    pub tax: TaxTables,
    pub regulatory: RegulatoryConfig,
    pub products: ProductConfig,
    pub esg: EsgFlags,
    pub terminology: Terminology,
    /// Ordered county names offered in the address form.
    pub counties: Vec<String>,
    /// Net worth bands, lowest first.
    pub net_worth_bands: Vec<Band>,
    /// Annual income bands, lowest first.
    pub income_bands: Vec<Band>,
    pub disclosures: Disclosures,
}

impl JurisdictionConfig {
    /// Whether `product` (any case) is offered in this jurisdiction.
    pub fn offers_product(&self, product: &str) -> bool {
        self.products.available.iter().any(|p| p.matches(product))
    }
}

/// Currency used for amounts and band labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Symbol prefixed to formatted amounts ("£", "€").
    pub symbol: String,
    /// ISO 4217 code.
    pub code: String,
    pub name: String,
}

/// Postal address conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressConfig {
    /// "Postcode" or "Eircode".
    pub postcode_label: String,
    pub postcode_placeholder: String,
    pub postcode_pattern: ValidationPattern,
    pub postcode_validation_message: String,
    pub county_label: String,
    pub county_required: bool,
}

/// Personal tax identifier (NI number, PPS number).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxIdConfig {
    pub label: String,
    pub short_label: String,
    pub placeholder: String,
    pub pattern: ValidationPattern,
    pub validation_message: String,
    pub help_text: String,
}

/// Tax rate tables. Stored for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTables {
    /// Income tax bands in display order.
    pub rates: Vec<TaxRateBand>,
    pub capital_gains_rate: CapitalGainsRate,
    /// Annual capital gains exemption, in whole currency units.
    pub capital_gains_allowance: u32,
    /// Main corporation tax rate, percent.
    pub corporate_tax_rate: u32,
}

/// One income tax band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRateBand {
    pub value: String,
    pub label: String,
    /// Percent.
    pub rate: u32,
}

impl OptionEntry for TaxRateBand {
    fn option_value(&self) -> &str {
        &self.value
    }

    fn option_label(&self) -> &str {
        &self.label
    }
}

/// Capital gains tax rate: a single flat percentage, or split by income
/// band with separate rates for residential property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CapitalGainsRate {
    Flat(u32),
    Banded {
        basic: u32,
        higher: u32,
        residential: ResidentialRates,
    },
}

/// Residential property capital gains rates, percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentialRates {
    pub basic: u32,
    pub higher: u32,
}

/// Regulator and tax authority naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulatoryConfig {
    pub regulator: String,
    /// "FCA", "CBI".
    pub regulator_short: String,
    pub regulator_id_label: String,
    pub tax_authority: String,
    pub tax_authority_full: String,
}

/// Product shelf for the jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductConfig {
    /// Codes accepted by the availability check.
    pub available: Vec<ProductCode>,
    pub visibility: ProductVisibility,
}

/// Which product sections the journeys should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVisibility {
    pub show_isa: bool,
    pub show_jisa: bool,
    pub show_sipp: bool,
    pub show_gia: bool,
    pub show_aim: bool,
}

/// Whether ESG preferences are shown, and whether they must be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsgFlags {
    pub show: bool,
    pub required: bool,
}

/// Jurisdiction-specific wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminology {
    pub non_resident_label: String,
    /// "National Insurance", "PRSI".
    pub social_insurance: String,
    pub pension_schemes: Vec<String>,
}

/// A value/label pair for wealth and income selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub value: String,
    pub label: String,
}

impl Band {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl OptionEntry for Band {
    fn option_value(&self) -> &str {
        &self.value
    }

    fn option_label(&self) -> &str {
        &self.label
    }
}

/// HTML blocks shown alongside tax content and in the page footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclosures {
    pub tax_disclaimer: String,
    pub regulatory_footer: String,
}
