//! # Validate Subcommand
//!
//! Checks a postcode or tax identifier against the active jurisdiction.
//! Prints `valid` or `invalid`; the exit code follows.

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::CliSession;

/// Arguments for the `evelyn validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(subcommand)]
    pub command: ValidateCommand,
}

#[derive(Subcommand, Debug)]
pub enum ValidateCommand {
    /// UK postcode or Irish Eircode.
    Postcode { value: String },
    /// National Insurance number or PPS number.
    TaxId { value: String },
}

/// Execute the validate subcommand.
pub fn run_validate<W: Write>(
    args: &ValidateArgs,
    session: &CliSession<'_>,
    out: &mut W,
) -> Result<u8> {
    let config = session.config();
    let (valid, message) = match &args.command {
        ValidateCommand::Postcode { value } => (
            session.validate_postcode(value),
            &config.address.postcode_validation_message,
        ),
        ValidateCommand::TaxId { value } => (
            session.validate_tax_id(value),
            &config.tax_id.validation_message,
        ),
    };

    if valid {
        writeln!(out, "valid")?;
        Ok(0)
    } else {
        writeln!(out, "invalid")?;
        tracing::info!(jurisdiction = %config.code, "{message}");
        Ok(1)
    }
}
