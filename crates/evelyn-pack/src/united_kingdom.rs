//! United Kingdom reference data.
//!
//! Provides the UK record for the registry:
//!   - Sterling currency and Royal Mail postcode format
//!   - National Insurance number format (HMRC)
//!   - 2024/25 income tax bands, CGT rates and allowance, corporation tax
//!   - FCA regulatory wording and the ISA/JISA/SIPP/GIA/AIM product shelf

use evelyn_core::{JurisdictionCode, ProductCode, ValidationPattern};

use crate::config::*;
use crate::counties::{owned, UK_COUNTIES};
use crate::error::PackResult;

/// Outward code, optional space, inward code. `SW1A 1AA`, `M1 1AE`.
pub const POSTCODE_PATTERN: &str = r"(?i)^[A-Z]{1,2}[0-9][A-Z0-9]?\s?[0-9][A-Z]{2}$";

/// Two prefix letters, six digits, one suffix letter. `AB123456C`.
pub const NI_NUMBER_PATTERN: &str = r"(?i)^[A-Z]{2}[0-9]{6}[A-Z]$";

const TAX_DISCLAIMER: &str = r#"<p><strong>Important Tax Information</strong></p>
<p>The information displayed is for guidance only and should not be considered tax advice.
Tax rules are complex and subject to change. Your personal circumstances will affect your
tax position.</p>
<p>We recommend seeking independent professional tax advice from a qualified adviser
before making investment decisions.</p>
<p>For specific guidance, please consult HMRC (gov.uk) or a qualified UK tax adviser.</p>"#;

const REGULATORY_FOOTER: &str = "Evelyn Partners Investment Management LLP (Reg. No. OC369632) and Evelyn Partners
Investment Services Limited (Reg. No. 976145) are authorised and regulated by the
Financial Conduct Authority. Registered in England at 45 Gresham Street, London EC2V 7BG.";

// ── Tables ──────────────────────────────────────────────────────────────

fn tax_rates() -> Vec<TaxRateBand> {
    [
        ("nil", "Nil (0%)", 0),
        ("basic", "Basic (20%)", 20),
        ("higher", "Higher (40%)", 40),
        ("additional", "Additional (45%)", 45),
    ]
    .into_iter()
    .map(|(value, label, rate)| TaxRateBand {
        value: value.to_string(),
        label: label.to_string(),
        rate,
    })
    .collect()
}

fn net_worth_bands() -> Vec<Band> {
    vec![
        Band::new("under_100k", "Under £100,000"),
        Band::new("100k_250k", "£100,000 - £250,000"),
        Band::new("250k_500k", "£250,000 - £500,000"),
        Band::new("500k_1m", "£500,000 - £1,000,000"),
        Band::new("1m_2.5m", "£1,000,000 - £2,500,000"),
        Band::new("over_2.5m", "Over £2,500,000"),
    ]
}

fn income_bands() -> Vec<Band> {
    vec![
        Band::new("under_25k", "Under £25,000"),
        Band::new("25k_50k", "£25,000 - £50,000"),
        Band::new("50k_100k", "£50,000 - £100,000"),
        Band::new("100k_150k", "£100,000 - £150,000"),
        Band::new("150k_250k", "£150,000 - £250,000"),
        Band::new("over_250k", "Over £250,000"),
    ]
}

fn products() -> PackResult<Vec<ProductCode>> {
    ["isa", "jisa", "sipp", "gia", "aim"]
        .into_iter()
        .map(|code| ProductCode::new(code).map_err(Into::into))
        .collect()
}

// ── Record ──────────────────────────────────────────────────────────────

/// Build the United Kingdom configuration record.
pub fn united_kingdom() -> PackResult<JurisdictionConfig> {
    Ok(JurisdictionConfig {
        code: JurisdictionCode::UK,
        name: "United Kingdom".to_string(),
        currency: CurrencyConfig {
            symbol: "£".to_string(),
            code: "GBP".to_string(),
            name: "Pound Sterling".to_string(),
        },
        address: AddressConfig {
            postcode_label: "Postcode".to_string(),
            postcode_placeholder: "SW1A 1AA".to_string(),
            postcode_pattern: ValidationPattern::new(POSTCODE_PATTERN)?,
            postcode_validation_message: "Please enter a valid UK postcode (e.g., SW1A 1AA)"
                .to_string(),
            county_label: "County".to_string(),
            county_required: false,
        },
        tax_id: TaxIdConfig {
            label: "National Insurance Number".to_string(),
            short_label: "NI Number".to_string(),
            placeholder: "AB123456C".to_string(),
            pattern: ValidationPattern::new(NI_NUMBER_PATTERN)?,
            validation_message: "Please enter a valid NI number (e.g., AB123456C)".to_string(),
            help_text: "Your National Insurance number can be found on your payslip, P60, or letters from HMRC"
                .to_string(),
        },
        tax: TaxTables {
            rates: tax_rates(),
            capital_gains_rate: CapitalGainsRate::Banded {
                basic: 10,
                higher: 20,
                residential: ResidentialRates {
                    basic: 18,
                    higher: 24,
                },
            },
            // 2024/25 annual exempt amount.
            capital_gains_allowance: 3000,
            corporate_tax_rate: 25,
        },
        regulatory: RegulatoryConfig {
            regulator: "Financial Conduct Authority".to_string(),
            regulator_short: "FCA".to_string(),
            regulator_id_label: "FCA Number".to_string(),
            tax_authority: "HMRC".to_string(),
            tax_authority_full: "HM Revenue & Customs".to_string(),
        },
        products: ProductConfig {
            available: products()?,
            visibility: ProductVisibility {
                show_isa: true,
                show_jisa: true,
                show_sipp: true,
                show_gia: true,
                show_aim: true,
            },
        },
        // Optional for UK clients.
        esg: EsgFlags {
            show: false,
            required: false,
        },
        terminology: Terminology {
            non_resident_label: "Non-UK jurisdiction".to_string(),
            social_insurance: "National Insurance".to_string(),
            pension_schemes: vec![
                "SIPP".to_string(),
                "Personal Pension".to_string(),
                "Workplace Pension".to_string(),
            ],
        },
        counties: owned(UK_COUNTIES),
        net_worth_bands: net_worth_bands(),
        income_bands: income_bands(),
        disclosures: Disclosures {
            tax_disclaimer: TAX_DISCLAIMER.to_string(),
            regulatory_footer: REGULATORY_FOOTER.to_string(),
        },
    })
}
