//! # Jurisdiction Registry
//!
//! The read-only mapping from [`JurisdictionCode`] to
//! [`JurisdictionConfig`], plus the shared [`EsgConfig`].
//!
//! ## Invariants
//!
//! Enforced once at construction, so lookups never fail afterwards:
//!
//! - at least one jurisdiction;
//! - codes are unique;
//! - the default jurisdiction ([`DEFAULT_JURISDICTION`]) is present, so
//!   resolution always has somewhere to fall back to.
//!
//! ## Sources
//!
//! - [`JurisdictionRegistry::builtin()`]: UK and Ireland, built once per
//!   process.
//! - [`JurisdictionRegistry::from_yaml_str()`] /
//!   [`JurisdictionRegistry::from_yaml_path()`]: a registry document of the
//!   same shape [`JurisdictionRegistry::to_yaml()`] writes.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use evelyn_core::JurisdictionCode;

use crate::config::JurisdictionConfig;
use crate::error::{PackError, PackResult};
use crate::esg::EsgConfig;
use crate::{ireland, united_kingdom};

/// Fallback when neither a request nor a persisted selection resolves.
pub const DEFAULT_JURISDICTION: JurisdictionCode = JurisdictionCode::UK;

static BUILTIN: OnceLock<JurisdictionRegistry> = OnceLock::new();

/// On-disk registry layout.
#[derive(Serialize, Deserialize)]
struct RegistryDocument {
    jurisdictions: Vec<JurisdictionConfig>,
    #[serde(default)]
    esg: EsgConfig,
}

/// Immutable jurisdiction registry.
#[derive(Debug, Clone, PartialEq)]
pub struct JurisdictionRegistry {
    configs: Vec<JurisdictionConfig>,
    default_index: usize,
    esg: EsgConfig,
}

impl JurisdictionRegistry {
    /// The built-in UK/Ireland registry, constructed on first use.
    ///
    /// # Errors
    ///
    /// Only if the built-in reference data is itself malformed, which the
    /// test suite rules out.
    pub fn builtin() -> PackResult<&'static JurisdictionRegistry> {
        if let Some(registry) = BUILTIN.get() {
            return Ok(registry);
        }
        let registry = Self::build_builtin()?;
        Ok(BUILTIN.get_or_init(|| registry))
    }

    /// Build a fresh copy of the built-in registry.
    pub fn build_builtin() -> PackResult<Self> {
        Self::new(
            vec![united_kingdom::united_kingdom()?, ireland::ireland()?],
            EsgConfig::default(),
        )
    }

    /// Assemble a registry, checking the invariants listed on the module.
    pub fn new(configs: Vec<JurisdictionConfig>, esg: EsgConfig) -> PackResult<Self> {
        if configs.is_empty() {
            return Err(PackError::Empty);
        }
        let mut seen = BTreeSet::new();
        for config in &configs {
            if !seen.insert(config.code) {
                return Err(PackError::DuplicateCode(config.code));
            }
        }
        let default_index = configs
            .iter()
            .position(|c| c.code == DEFAULT_JURISDICTION)
            .ok_or(PackError::MissingDefault(DEFAULT_JURISDICTION))?;

        tracing::debug!(
            jurisdictions = configs.len(),
            codes = ?seen,
            "jurisdiction registry assembled"
        );
        Ok(Self {
            configs,
            default_index,
            esg,
        })
    }

    /// Parse a registry document.
    pub fn from_yaml_str(yaml: &str) -> PackResult<Self> {
        let doc: RegistryDocument = serde_yaml::from_str(yaml)?;
        Self::new(doc.jurisdictions, doc.esg)
    }

    /// Read and parse a registry document from disk.
    pub fn from_yaml_path(path: &Path) -> PackResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|source| PackError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading jurisdiction registry");
        Self::from_yaml_str(&yaml)
    }

    /// Serialize to the document shape accepted by the YAML loaders.
    pub fn to_yaml(&self) -> PackResult<String> {
        let doc = RegistryDocument {
            jurisdictions: self.configs.clone(),
            esg: self.esg.clone(),
        };
        Ok(serde_yaml::to_string(&doc)?)
    }

    /// Look up a record by code.
    pub fn get(&self, code: JurisdictionCode) -> Option<&JurisdictionConfig> {
        self.configs.iter().find(|c| c.code == code)
    }

    /// Look up a record by exact, case-sensitive code text.
    pub fn lookup(&self, code: &str) -> Option<&JurisdictionConfig> {
        JurisdictionCode::new(code).ok().and_then(|code| self.get(code))
    }

    pub fn contains(&self, code: JurisdictionCode) -> bool {
        self.get(code).is_some()
    }

    /// The record for [`DEFAULT_JURISDICTION`].
    pub fn default_config(&self) -> &JurisdictionConfig {
        &self.configs[self.default_index]
    }

    /// The record for `code`, or the default record when absent.
    pub fn get_or_default(&self, code: JurisdictionCode) -> &JurisdictionConfig {
        self.get(code).unwrap_or_else(|| self.default_config())
    }

    /// Codes in registration order.
    pub fn codes(&self) -> impl Iterator<Item = JurisdictionCode> + '_ {
        self.configs.iter().map(|c| c.code)
    }

    /// Records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &JurisdictionConfig> {
        self.configs.iter()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Always `false`: an empty registry cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Shared ESG questionnaire content.
    pub fn esg(&self) -> &EsgConfig {
        &self.esg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_exactly_uk_and_ireland() {
        let registry = JurisdictionRegistry::builtin().unwrap();
        let codes: Vec<JurisdictionCode> = registry.codes().collect();
        assert_eq!(codes, [JurisdictionCode::UK, JurisdictionCode::IE]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn builtin_is_cached() {
        let a = JurisdictionRegistry::builtin().unwrap();
        let b = JurisdictionRegistry::builtin().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = JurisdictionRegistry::build_builtin().unwrap();
        assert_eq!(registry.lookup("IE").unwrap().name, "Ireland");
        assert!(registry.lookup("ie").is_none());
        assert!(registry.lookup("XX").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn default_is_uk() {
        let registry = JurisdictionRegistry::build_builtin().unwrap();
        assert_eq!(registry.default_config().code, JurisdictionCode::UK);
        let fallback = registry.get_or_default(JurisdictionCode::new("FR").unwrap());
        assert_eq!(fallback.code, JurisdictionCode::UK);
    }

    #[test]
    fn rejects_empty() {
        let err = JurisdictionRegistry::new(Vec::new(), EsgConfig::default()).unwrap_err();
        assert!(matches!(err, PackError::Empty));
    }

    #[test]
    fn rejects_duplicates() {
        let uk = united_kingdom::united_kingdom().unwrap();
        let err = JurisdictionRegistry::new(vec![uk.clone(), uk], EsgConfig::default())
            .unwrap_err();
        assert!(matches!(err, PackError::DuplicateCode(JurisdictionCode::UK)));
    }

    #[test]
    fn rejects_missing_default() {
        let ie = ireland::ireland().unwrap();
        let err = JurisdictionRegistry::new(vec![ie], EsgConfig::default()).unwrap_err();
        assert!(matches!(err, PackError::MissingDefault(JurisdictionCode::UK)));
    }

    #[test]
    fn exposes_shared_esg() {
        let registry = JurisdictionRegistry::build_builtin().unwrap();
        assert_eq!(registry.esg().exclusions.len(), 6);
    }
}
