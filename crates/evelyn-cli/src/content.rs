//! # Lookup Subcommands
//!
//! One-shot projections of the active configuration: product availability,
//! URL stamping, and the disclosure HTML blocks.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use crate::CliSession;

/// Arguments for the `evelyn product` subcommand.
#[derive(Args, Debug)]
pub struct ProductArgs {
    /// Product code, any case (isa, jisa, sipp, gia, aim).
    pub code: String,
}

/// Arguments for the `evelyn stamp-url` subcommand.
#[derive(Args, Debug)]
pub struct StampUrlArgs {
    pub url: String,
}

pub fn run_product<W: Write>(
    args: &ProductArgs,
    session: &CliSession<'_>,
    out: &mut W,
) -> Result<u8> {
    let verdict = if session.is_product_available(&args.code) {
        "available"
    } else {
        "unavailable"
    };
    writeln!(out, "{verdict}")?;
    Ok(0)
}

pub fn run_stamp_url<W: Write>(
    args: &StampUrlArgs,
    session: &CliSession<'_>,
    out: &mut W,
) -> Result<u8> {
    writeln!(out, "{}", session.append_jurisdiction_to_url(&args.url))?;
    Ok(0)
}

pub fn run_disclaimer<W: Write>(session: &CliSession<'_>, out: &mut W) -> Result<u8> {
    writeln!(out, "{}", session.tax_disclaimer())?;
    Ok(0)
}

pub fn run_footer<W: Write>(session: &CliSession<'_>, out: &mut W) -> Result<u8> {
    writeln!(out, "{}", session.regulatory_footer())?;
    Ok(0)
}
