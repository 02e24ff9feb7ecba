//! # evelyn-cli: Jurisdiction Toolkit Command-Line Interface
//!
//! Provides the `evelyn` binary: a host surface that opens a
//! [`JurisdictionSession`](evelyn_session::JurisdictionSession) the way a
//! page load would and runs one helper against it.
//!
//! ## Subcommands
//!
//! - `evelyn show`: The resolved configuration (summary, JSON or YAML).
//! - `evelyn set`: Persist a selection to the `--state` file.
//! - `evelyn validate`: Postcode / tax-ID checks.
//! - `evelyn format`: Currency formatting.
//! - `evelyn options`: `<option>` markup for form dropdowns.
//! - `evelyn product`, `stamp-url`, `disclaimer`, `footer`: Single lookups.
//!
//! ```bash
//! evelyn --url 'https://portal.test/kyc.html?jurisdiction=ie' show
//! evelyn --state selection.json set IE
//! evelyn --state selection.json validate postcode 'D02 AF30'
//! evelyn -j UK format 1234.5 --decimals 2
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live in modules here and
//!   write to any `io::Write` so they can be tested without a terminal.
//! - Handlers return the process exit code. A predicate that fails
//!   (`validate`, `set`) exits 1; load errors propagate through `anyhow`.

pub mod content;
pub mod context;
pub mod format;
pub mod options;
pub mod select;
pub mod show;
pub mod validate;

pub use context::{CliSession, SessionArgs};

#[cfg(test)]
pub(crate) mod testing {
    use evelyn_pack::JurisdictionRegistry;
    use evelyn_session::{JurisdictionSession, MemorySelectionStore, SelectionStore};

    use crate::CliSession;

    pub fn session(request: Option<&str>) -> CliSession<'static> {
        let registry = JurisdictionRegistry::builtin().unwrap();
        let store: Box<dyn SelectionStore> = Box::new(MemorySelectionStore::new());
        JurisdictionSession::new(registry, store, request)
    }

    pub fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }
}
