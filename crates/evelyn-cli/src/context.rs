//! # Session Context
//!
//! Global flags that decide which registry is loaded, where the selection
//! is persisted, and what the "page" requested.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use evelyn_pack::JurisdictionRegistry;
use evelyn_session::{
    jurisdiction_param_from_address, FileSelectionStore, JurisdictionSession,
    MemorySelectionStore, SelectionStore,
};

/// A session over whichever store the flags selected.
pub type CliSession<'r> = JurisdictionSession<'r, Box<dyn SelectionStore>>;

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Load jurisdictions from a YAML registry instead of the built-in UK/IE pair.
    #[arg(long, global = true, value_name = "YAML")]
    pub registry: Option<PathBuf>,

    /// JSON file holding the persisted selection. Omit for an in-memory slot.
    #[arg(long, global = true, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Page address whose `jurisdiction` query parameter is the request.
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Request parameter value. Takes precedence over `--url`.
    #[arg(short = 'j', long, global = true, value_name = "CODE")]
    pub jurisdiction: Option<String>,
}

impl SessionArgs {
    /// The registry named by `--registry`, or the built-in one.
    pub fn load_registry(&self) -> Result<JurisdictionRegistry> {
        match &self.registry {
            Some(path) => JurisdictionRegistry::from_yaml_path(path)
                .with_context(|| format!("failed to load registry: {}", path.display())),
            None => JurisdictionRegistry::build_builtin()
                .context("failed to build the built-in registry"),
        }
    }

    /// The selection slot named by `--state`, or a fresh in-memory one.
    pub fn open_store(&self) -> Box<dyn SelectionStore> {
        match &self.state {
            Some(path) => Box::new(FileSelectionStore::new(path)),
            None => Box::new(MemorySelectionStore::new()),
        }
    }

    /// The raw request parameter, if any.
    pub fn request(&self) -> Option<String> {
        self.jurisdiction.clone().or_else(|| {
            self.url
                .as_deref()
                .and_then(jurisdiction_param_from_address)
        })
    }

    /// Open a session as a page load would.
    pub fn open<'r>(&self, registry: &'r JurisdictionRegistry) -> CliSession<'r> {
        let request = self.request();
        JurisdictionSession::new(registry, self.open_store(), request.as_deref())
    }
}
