//! # Show Subcommand
//!
//! Prints the active jurisdiction's configuration. `--format yaml` output
//! is a valid single-record section of a registry file.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use evelyn_pack::{CapitalGainsRate, JurisdictionConfig};

use crate::CliSession;

/// Arguments for the `evelyn show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = ShowFormat::Summary)]
    pub format: ShowFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// Aligned key/value lines.
    Summary,
    Json,
    Yaml,
}

/// Execute the show subcommand.
pub fn run_show<W: Write>(args: &ShowArgs, session: &CliSession<'_>, out: &mut W) -> Result<u8> {
    let config = session.config();
    match args.format {
        ShowFormat::Json => {
            let json = serde_json::to_string_pretty(config)
                .context("failed to serialize configuration as JSON")?;
            writeln!(out, "{json}")?;
        }
        ShowFormat::Yaml => {
            let yaml =
                serde_yaml::to_string(config).context("failed to serialize configuration as YAML")?;
            write!(out, "{yaml}")?;
        }
        ShowFormat::Summary => write_summary(session, config, out)?,
    }
    Ok(0)
}

fn write_summary<W: Write>(
    session: &CliSession<'_>,
    config: &JurisdictionConfig,
    out: &mut W,
) -> Result<()> {
    let products = config
        .products
        .available
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let capital_gains = match &config.tax.capital_gains_rate {
        CapitalGainsRate::Flat(rate) => format!("{rate}%"),
        CapitalGainsRate::Banded { basic, higher, .. } => format!("{basic}% / {higher}%"),
    };
    let esg = match (config.esg.show, config.esg.required) {
        (true, true) => "shown, required",
        (true, false) => "shown",
        (false, _) => "hidden",
    };

    let rows = [
        ("jurisdiction", format!("{} ({})", config.code, config.name)),
        ("source", session.resolution().source.to_string()),
        (
            "currency",
            format!(
                "{} {} ({})",
                config.currency.symbol, config.currency.code, config.currency.name
            ),
        ),
        ("postcode", config.address.postcode_label.clone()),
        ("tax id", config.tax_id.label.clone()),
        (
            "regulator",
            format!(
                "{} ({})",
                config.regulatory.regulator, config.regulatory.regulator_short
            ),
        ),
        ("tax authority", config.regulatory.tax_authority.clone()),
        ("capital gains", capital_gains),
        ("products", products),
        ("esg", esg.to_string()),
        ("counties", config.counties.len().to_string()),
    ];
    for (key, value) in rows {
        writeln!(out, "{key:<14} {value}")?;
    }
    Ok(())
}
