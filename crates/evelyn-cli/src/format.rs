//! # Format Subcommand

use std::io::Write;

use anyhow::Result;
use clap::Args;

use crate::CliSession;

/// Arguments for the `evelyn format` subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Amount to format. Read like a form field: leading number only,
    /// anything unparseable is zero.
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Digits after the decimal point.
    #[arg(long, default_value_t = 0)]
    pub decimals: usize,
}

/// Execute the format subcommand.
pub fn run_format<W: Write>(args: &FormatArgs, session: &CliSession<'_>, out: &mut W) -> Result<u8> {
    writeln!(out, "{}", session.format_currency_text(&args.value, args.decimals))?;
    Ok(0)
}
