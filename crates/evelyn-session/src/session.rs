//! # Jurisdiction Session
//!
//! The explicit context object every helper hangs off. A session borrows
//! the registry, owns the selection store and remembers the validated
//! request parameter for the page it was created for.
//!
//! The active jurisdiction is recomputed from those three on every call, so
//! the precedence in [`resolve`] holds throughout the session's life. While
//! a request parameter is in force it stays sticky: after
//! [`JurisdictionSession::set_jurisdiction`] accepts a code, the request's
//! code is written back to the store, so the slot always names the
//! jurisdiction the page is actually showing.

use evelyn_core::{format_currency, parse_leading_number, render_options, JurisdictionCode};
use evelyn_pack::{JurisdictionConfig, JurisdictionRegistry};
use url::Url;

use crate::request::{append_jurisdiction_param, jurisdiction_param};
use crate::resolve::{resolve, Resolution, ResolutionSource};
use crate::store::SelectionStore;

/// Session-scoped view of the registry through the active jurisdiction.
#[derive(Debug)]
pub struct JurisdictionSession<'r, S> {
    registry: &'r JurisdictionRegistry,
    store: S,
    request: Option<JurisdictionCode>,
}

impl<'r, S: SelectionStore> JurisdictionSession<'r, S> {
    /// Open a session for a page load.
    ///
    /// `request` is the raw `jurisdiction` parameter, if the page had one.
    /// A parameter that names a registry entry (in any case) is written to
    /// the store immediately.
    pub fn new(registry: &'r JurisdictionRegistry, mut store: S, request: Option<&str>) -> Self {
        let persisted = store.load();
        let resolution = resolve(registry, request, persisted.as_deref());

        let request = match resolution.source {
            ResolutionSource::Request => {
                store.save(resolution.code.as_str());
                Some(resolution.code)
            }
            _ => None,
        };
        tracing::debug!(
            jurisdiction = %resolution.code,
            source = %resolution.source,
            "resolved active jurisdiction"
        );

        Self {
            registry,
            store,
            request,
        }
    }

    /// Open a session for the page at `page`, reading its query string.
    pub fn from_url(registry: &'r JurisdictionRegistry, store: S, page: &Url) -> Self {
        let request = jurisdiction_param(page);
        Self::new(registry, store, request.as_deref())
    }

    /// The active code and where it came from.
    pub fn resolution(&self) -> Resolution {
        if let Some(code) = self.request {
            return Resolution {
                code,
                source: ResolutionSource::Request,
            };
        }
        let persisted = self.store.load();
        resolve(self.registry, None, persisted.as_deref())
    }

    /// The active jurisdiction code.
    pub fn jurisdiction(&self) -> JurisdictionCode {
        self.resolution().code
    }

    /// The active jurisdiction's full record.
    pub fn config(&self) -> &'r JurisdictionConfig {
        self.registry.get_or_default(self.jurisdiction())
    }

    /// Persist `code` as the selection if the registry knows it.
    ///
    /// The comparison is exact: `"ie"` is not `"IE"`. Returns `false` and
    /// leaves the store untouched for unknown codes. When the session was
    /// opened with a request parameter, that code is re-persisted afterwards
    /// and remains active.
    pub fn set_jurisdiction(&mut self, code: &str) -> bool {
        match self.registry.lookup(code) {
            Some(config) => {
                self.store.save(config.code.as_str());
                tracing::debug!(jurisdiction = %config.code, "jurisdiction selection persisted");
                if let Some(requested) = self.request.filter(|r| *r != config.code) {
                    self.store.save(requested.as_str());
                    tracing::debug!(
                        jurisdiction = %requested,
                        "request parameter re-persisted over selection"
                    );
                }
                true
            }
            None => {
                tracing::debug!(code, "rejected unknown jurisdiction selection");
                false
            }
        }
    }

    // ── Validation ──────────────────────────────────────────────────────

    /// Whether `value` is a well-formed postcode (UK) or Eircode (IE).
    pub fn validate_postcode(&self, value: &str) -> bool {
        self.config().address.postcode_pattern.matches_normalized(value)
    }

    /// Whether `value` is a well-formed NI number (UK) or PPS number (IE).
    pub fn validate_tax_id(&self, value: &str) -> bool {
        self.config().tax_id.pattern.matches_normalized(value)
    }

    /// Case-insensitive check against the available product list.
    pub fn is_product_available(&self, product: &str) -> bool {
        self.config().offers_product(product)
    }

    // ── Formatting ──────────────────────────────────────────────────────

    /// `£1,234.50` / `€1,234.50`. Non-finite values format as zero.
    pub fn format_currency(&self, value: f64, decimals: usize) -> String {
        format_currency(&self.config().currency.symbol, value, decimals)
    }

    /// Format an amount given as text. Unparseable text formats as zero.
    pub fn format_currency_text(&self, value: &str, decimals: usize) -> String {
        self.format_currency(parse_leading_number(value).unwrap_or(0.0), decimals)
    }

    /// Stamp `url` with the active jurisdiction.
    pub fn append_jurisdiction_to_url(&self, url: &str) -> String {
        append_jurisdiction_param(url, self.jurisdiction())
    }

    // ── Option lists ────────────────────────────────────────────────────

    pub fn county_options(&self) -> String {
        render_options(&self.config().counties)
    }

    pub fn net_worth_options(&self) -> String {
        render_options(&self.config().net_worth_bands)
    }

    pub fn income_band_options(&self) -> String {
        render_options(&self.config().income_bands)
    }

    pub fn tax_rate_options(&self) -> String {
        render_options(&self.config().tax.rates)
    }

    /// ESG minimum-allocation choices. Shared by every jurisdiction.
    pub fn esg_allocation_options(&self) -> String {
        render_options(&self.registry.esg().allocation_options)
    }

    /// ESG sector exclusions. Shared by every jurisdiction.
    pub fn esg_exclusion_options(&self) -> String {
        render_options(&self.registry.esg().exclusions)
    }

    // ── Projections ─────────────────────────────────────────────────────

    pub fn county_list(&self) -> &'r [String] {
        &self.config().counties
    }

    pub fn tax_disclaimer(&self) -> &'r str {
        &self.config().disclosures.tax_disclaimer
    }

    pub fn regulatory_footer(&self) -> &'r str {
        &self.config().disclosures.regulatory_footer
    }

    pub fn registry(&self) -> &'r JurisdictionRegistry {
        self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Close the session, handing back the store.
    pub fn into_store(self) -> S {
        self.store
    }
}
