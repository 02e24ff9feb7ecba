//! # Jurisdiction Resolution
//!
//! Picks the active jurisdiction from, in priority order, the request
//! parameter, the persisted selection and [`DEFAULT_JURISDICTION`].
//!
//! - The request parameter is case-folded before lookup (`ie` → `IE`).
//! - The persisted value must match a registry code exactly.
//! - Anything unknown at one step falls through to the next.
//!
//! Resolution is pure. Making a request selection sticky is the caller's
//! job (see [`JurisdictionSession`](crate::JurisdictionSession)).

use evelyn_core::JurisdictionCode;
use evelyn_pack::{JurisdictionRegistry, DEFAULT_JURISDICTION};

/// Where the active jurisdiction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionSource {
    /// The page's `jurisdiction` parameter.
    Request,
    /// The persisted selection slot.
    Persisted,
    /// Nothing usable; fell back to the default.
    Default,
}

impl std::fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Request => "request",
            Self::Persisted => "persisted",
            Self::Default => "default",
        };
        f.write_str(s)
    }
}

/// A resolved jurisdiction. The code is always present in the registry it
/// was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub code: JurisdictionCode,
    pub source: ResolutionSource,
}

/// Resolve the active jurisdiction.
pub fn resolve(
    registry: &JurisdictionRegistry,
    request: Option<&str>,
    persisted: Option<&str>,
) -> Resolution {
    if let Some(raw) = request.filter(|raw| !raw.is_empty()) {
        match JurisdictionCode::parse_lenient(raw).filter(|code| registry.contains(*code)) {
            Some(code) => {
                return Resolution {
                    code,
                    source: ResolutionSource::Request,
                }
            }
            None => tracing::debug!(requested = raw, "ignoring unknown requested jurisdiction"),
        }
    }

    if let Some(raw) = persisted.filter(|raw| !raw.is_empty()) {
        match registry.lookup(raw) {
            Some(config) => {
                return Resolution {
                    code: config.code,
                    source: ResolutionSource::Persisted,
                }
            }
            None => tracing::debug!(persisted = raw, "ignoring unknown persisted jurisdiction"),
        }
    }

    Resolution {
        code: DEFAULT_JURISDICTION,
        source: ResolutionSource::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> JurisdictionRegistry {
        JurisdictionRegistry::build_builtin().unwrap()
    }

    #[test]
    fn request_wins_over_persisted() {
        let r = resolve(&registry(), Some("ie"), Some("UK"));
        assert_eq!(r.code, JurisdictionCode::IE);
        assert_eq!(r.source, ResolutionSource::Request);
    }

    #[test]
    fn persisted_used_without_request() {
        let r = resolve(&registry(), None, Some("IE"));
        assert_eq!(r.code, JurisdictionCode::IE);
        assert_eq!(r.source, ResolutionSource::Persisted);
    }

    #[test]
    fn unknown_request_falls_through_to_persisted() {
        let r = resolve(&registry(), Some("fr"), Some("IE"));
        assert_eq!(r.code, JurisdictionCode::IE);
        assert_eq!(r.source, ResolutionSource::Persisted);
    }

    #[test]
    fn persisted_value_is_case_sensitive() {
        let r = resolve(&registry(), None, Some("ie"));
        assert_eq!(r.code, JurisdictionCode::UK);
        assert_eq!(r.source, ResolutionSource::Default);
    }

    #[test]
    fn defaults_to_uk() {
        let r = resolve(&registry(), None, None);
        assert_eq!(r.code, JurisdictionCode::UK);
        assert_eq!(r.source, ResolutionSource::Default);

        let r = resolve(&registry(), Some(""), Some("XX"));
        assert_eq!(r.code, JurisdictionCode::UK);
        assert_eq!(r.source, ResolutionSource::Default);
    }

    #[test]
    fn source_display() {
        assert_eq!(ResolutionSource::Request.to_string(), "request");
        assert_eq!(ResolutionSource::Default.to_string(), "default");
    }
}
