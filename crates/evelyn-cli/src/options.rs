//! # Options Subcommand
//!
//! Prints the `<option>` markup a form dropdown would be filled with.

use std::io::Write;

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::CliSession;

/// Arguments for the `evelyn options` subcommand.
#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Which list to render.
    #[arg(value_enum)]
    pub list: OptionList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OptionList {
    Counties,
    NetWorth,
    Income,
    TaxRates,
    /// Shared across jurisdictions.
    EsgAllocation,
    /// Shared across jurisdictions.
    EsgExclusions,
}

/// Execute the options subcommand.
pub fn run_options<W: Write>(
    args: &OptionsArgs,
    session: &CliSession<'_>,
    out: &mut W,
) -> Result<u8> {
    let markup = match args.list {
        OptionList::Counties => session.county_options(),
        OptionList::NetWorth => session.net_worth_options(),
        OptionList::Income => session.income_band_options(),
        OptionList::TaxRates => session.tax_rate_options(),
        OptionList::EsgAllocation => session.esg_allocation_options(),
        OptionList::EsgExclusions => session.esg_exclusion_options(),
    };
    writeln!(out, "{markup}")?;
    Ok(0)
}
