//! Ireland reference data.
//!
//! Provides the Irish record for the registry:
//!   - Euro currency and Eircode format
//!   - PPS number format (Revenue Commissioners)
//!   - Standard/marginal income tax bands, flat CGT, 15% corporation tax
//!   - Central Bank of Ireland wording; GIA and AIM only
//!   - ESG preferences shown and mandatory (MiFID II suitability)

use evelyn_core::{JurisdictionCode, ProductCode, ValidationPattern};

use crate::config::*;
use crate::counties::{owned, IRISH_COUNTIES};
use crate::error::PackResult;

/// Routing key, optional space, unique identifier. `D02 AF30`.
pub const EIRCODE_PATTERN: &str = r"(?i)^[A-Z][0-9]{2}\s?[A-Z0-9]{4}$";

/// Seven digits followed by one or two check letters. `1234567AB`.
pub const PPS_NUMBER_PATTERN: &str = r"(?i)^[0-9]{7}[A-Z]{1,2}$";

const TAX_DISCLAIMER: &str = r#"<p><strong>Important Tax Information</strong></p>
<p>The information provided here is for general guidance purposes only and should not
be construed as tax advice. Tax rules are complex and subject to change.</p>
<p>Your personal circumstances will affect your tax position. We strongly recommend
that you seek independent professional tax advice from a qualified tax adviser or
accountant before making any investment decisions.</p>
<p>Evelyn Partners does not provide tax advice. For specific guidance on Irish tax
matters, please consult <a href="https://www.revenue.ie" target="_blank">Revenue.ie</a>
or a qualified Irish tax adviser.</p>
<p><strong>By proceeding, you acknowledge that:</strong></p>
<ul>
    <li>You have read and understood this disclaimer</li>
    <li>You accept responsibility for seeking appropriate tax advice</li>
    <li>The tax information displayed is for illustrative purposes only</li>
</ul>"#;

const REGULATORY_FOOTER: &str = "Evelyn Partners Investment Management (Ireland) is authorised and regulated by the
Central Bank of Ireland. Registered in Ireland.";

/// Build the Ireland configuration record.
pub fn ireland() -> PackResult<JurisdictionConfig> {
    Ok(JurisdictionConfig {
        code: JurisdictionCode::IE,
        name: "Ireland".to_string(),
        currency: CurrencyConfig {
            symbol: "€".to_string(),
            code: "EUR".to_string(),
            name: "Euro".to_string(),
        },
        address: AddressConfig {
            postcode_label: "Eircode".to_string(),
            postcode_placeholder: "D02 AF30".to_string(),
            postcode_pattern: ValidationPattern::new(EIRCODE_PATTERN)?,
            postcode_validation_message: "Please enter a valid Eircode (e.g., D02 AF30)"
                .to_string(),
            county_label: "County".to_string(),
            county_required: true,
        },
        tax_id: TaxIdConfig {
            label: "PPS Number".to_string(),
            short_label: "PPS".to_string(),
            placeholder: "1234567AB".to_string(),
            pattern: ValidationPattern::new(PPS_NUMBER_PATTERN)?,
            validation_message: "Please enter a valid PPS number (e.g., 1234567AB)".to_string(),
            help_text: "Your Personal Public Service number (7 digits followed by 1-2 letters)"
                .to_string(),
        },
        tax: TaxTables {
            rates: vec![
                TaxRateBand {
                    value: "standard".to_string(),
                    label: "Standard (20%)".to_string(),
                    rate: 20,
                },
                TaxRateBand {
                    value: "marginal".to_string(),
                    label: "Marginal (40%)".to_string(),
                    rate: 40,
                },
            ],
            capital_gains_rate: CapitalGainsRate::Flat(33),
            // Annual personal exemption, euro.
            capital_gains_allowance: 1270,
            // OECD Pillar Two aligned.
            corporate_tax_rate: 15,
        },
        regulatory: RegulatoryConfig {
            regulator: "Central Bank of Ireland".to_string(),
            regulator_short: "CBI".to_string(),
            regulator_id_label: "CBI Reference Number".to_string(),
            tax_authority: "Revenue".to_string(),
            tax_authority_full: "Revenue Commissioners".to_string(),
        },
        products: ProductConfig {
            available: vec![ProductCode::new("gia")?, ProductCode::new("aim")?],
            visibility: ProductVisibility {
                show_isa: false,
                show_jisa: false,
                show_sipp: false,
                show_gia: true,
                show_aim: true,
            },
        },
        esg: EsgFlags {
            show: true,
            required: true,
        },
        terminology: Terminology {
            non_resident_label: "Non-European jurisdiction".to_string(),
            social_insurance: "PRSI".to_string(),
            pension_schemes: vec![
                "PRSA".to_string(),
                "ARF".to_string(),
                "Personal Pension".to_string(),
            ],
        },
        counties: owned(IRISH_COUNTIES),
        net_worth_bands: vec![
            Band::new("under_100k", "Under €100,000"),
            Band::new("100k_300k", "€100,000 - €300,000"),
            Band::new("300k_600k", "€300,000 - €600,000"),
            Band::new("600k_1m", "€600,000 - €1,000,000"),
            Band::new("1m_3m", "€1,000,000 - €3,000,000"),
            Band::new("over_3m", "Over €3,000,000"),
        ],
        income_bands: vec![
            Band::new("under_30k", "Under €30,000"),
            Band::new("30k_60k", "€30,000 - €60,000"),
            Band::new("60k_120k", "€60,000 - €120,000"),
            Band::new("120k_180k", "€120,000 - €180,000"),
            Band::new("180k_300k", "€180,000 - €300,000"),
            Band::new("over_300k", "Over €300,000"),
        ],
        disclosures: Disclosures {
            tax_disclaimer: TAX_DISCLAIMER.to_string(),
            regulatory_footer: REGULATORY_FOOTER.to_string(),
        },
    })
}
