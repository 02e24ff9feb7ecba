//! # evelyn CLI entry point
//!
//! Parses command-line arguments, opens one jurisdiction session and
//! dispatches to a subcommand handler. Logs go to stderr so stdout carries
//! only command output.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use evelyn_cli::content::{
    run_disclaimer, run_footer, run_product, run_stamp_url, ProductArgs, StampUrlArgs,
};
use evelyn_cli::format::{run_format, FormatArgs};
use evelyn_cli::options::{run_options, OptionsArgs};
use evelyn_cli::select::{run_set, SetArgs};
use evelyn_cli::show::{run_show, ShowArgs};
use evelyn_cli::validate::{run_validate, ValidateArgs};
use evelyn_cli::SessionArgs;

/// Evelyn jurisdiction toolkit.
///
/// Resolves the active jurisdiction (UK or Ireland) the way a Fact Find or
/// Account Application page does, then runs one helper against it.
#[derive(Parser, Debug)]
#[command(name = "evelyn", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    session: SessionArgs,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the active jurisdiction's configuration.
    Show(ShowArgs),

    /// Persist a jurisdiction selection.
    Set(SetArgs),

    /// Validate a postcode or tax identifier.
    Validate(ValidateArgs),

    /// Format a currency amount.
    Format(FormatArgs),

    /// Render `<option>` markup for a form dropdown.
    Options(OptionsArgs),

    /// Check whether a product is offered.
    Product(ProductArgs),

    /// Append the active jurisdiction to a URL.
    StampUrl(StampUrlArgs),

    /// Print the tax disclaimer HTML.
    Disclaimer,

    /// Print the regulatory footer HTML.
    Footer,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let registry = cli.session.load_registry()?;
    let mut session = cli.session.open(&registry);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Show(args) => run_show(args, &session, &mut out),
        Commands::Set(args) => run_set(args, &mut session, &mut out),
        Commands::Validate(args) => run_validate(args, &session, &mut out),
        Commands::Format(args) => run_format(args, &session, &mut out),
        Commands::Options(args) => run_options(args, &session, &mut out),
        Commands::Product(args) => run_product(args, &session, &mut out),
        Commands::StampUrl(args) => run_stamp_url(args, &session, &mut out),
        Commands::Disclaimer => run_disclaimer(&session, &mut out),
        Commands::Footer => run_footer(&session, &mut out),
    }
}
