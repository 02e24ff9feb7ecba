//! # Set Subcommand
//!
//! Persists a jurisdiction selection. Only useful with `--state`; without
//! it the slot is in memory and forgotten on exit.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use evelyn_session::ResolutionSource;

use crate::CliSession;

/// Arguments for the `evelyn set` subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Registry code, exactly as listed (e.g. "IE").
    pub code: String,
}

/// Execute the set subcommand.
pub fn run_set<W: Write>(args: &SetArgs, session: &mut CliSession<'_>, out: &mut W) -> Result<u8> {
    if !session.set_jurisdiction(&args.code) {
        let supported = session
            .registry()
            .codes()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "unsupported jurisdiction '{}' (supported: {supported})",
            args.code
        )?;
        return Ok(1);
    }

    writeln!(out, "selected {}", args.code)?;
    let resolution = session.resolution();
    if resolution.source == ResolutionSource::Request && resolution.code.as_str() != args.code {
        writeln!(
            out,
            "request parameter keeps {} active for this page",
            resolution.code
        )?;
    }
    Ok(0)
}
