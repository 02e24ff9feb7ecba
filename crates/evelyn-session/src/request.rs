//! # Request Parameters
//!
//! The active jurisdiction can be chosen per page load with a
//! `jurisdiction` query parameter, and links carry it forward by having it
//! appended.

use evelyn_core::JurisdictionCode;
use url::Url;

/// Query parameter carrying the requested jurisdiction.
pub const JURISDICTION_PARAM: &str = "jurisdiction";

/// First `jurisdiction` value in the page's query string, decoded.
///
/// An empty value counts as absent.
pub fn jurisdiction_param(page: &Url) -> Option<String> {
    page.query_pairs()
        .find(|(key, _)| key == JURISDICTION_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Like [`jurisdiction_param`], for a page address given as text.
///
/// Relative addresses (`modules/fact-find.html?jurisdiction=ie`) are
/// accepted. An address that cannot be parsed at all has no parameter.
pub fn jurisdiction_param_from_address(address: &str) -> Option<String> {
    let parsed = Url::parse(address).or_else(|_| {
        Url::parse("http://localhost/").and_then(|base| base.join(address))
    });
    match parsed {
        Ok(page) => jurisdiction_param(&page),
        Err(error) => {
            tracing::debug!(address, %error, "unparseable page address, no jurisdiction parameter");
            None
        }
    }
}

/// Append `jurisdiction=<code>` to `url`.
///
/// Uses `&` when the URL already has a `?`, otherwise `?`. The URL is not
/// inspected any further: calling this twice appends the parameter twice.
pub fn append_jurisdiction_param(url: &str, code: JurisdictionCode) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{JURISDICTION_PARAM}={code}")
}
