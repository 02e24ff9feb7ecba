//! # Page Initialization
//!
//! Run once per page after it is ready. Stamps the currency symbol into
//! every placeholder element and carries the jurisdiction forward on
//! same-site page links.
//!
//! The page is reached only through [`PageAdapter`], so a browser binding,
//! a server-side template, or the in-memory [`StaticPage`] can all be
//! initialized the same way.

use evelyn_pack::JurisdictionConfig;

use crate::request::JURISDICTION_PARAM;
use crate::session::JurisdictionSession;
use crate::store::SelectionStore;

/// Classes whose elements display the currency symbol.
pub const CURRENCY_CLASSES: [&str; 2] = ["currency-symbol", "currency-prefix"];

/// Links whose href contains this are rewritten.
pub const PAGE_LINK_MARKER: &str = ".html";

/// Rendering adapter between initialization and a concrete page.
pub trait PageAdapter {
    /// Replace the text content of every element carrying any of `classes`.
    /// Returns how many elements were updated.
    fn set_text_by_class(&mut self, classes: &[&str], text: &str) -> usize;

    /// Visit every link whose href contains `marker`, in document order.
    /// When `rewrite` returns a new href, the link takes it. Returns how
    /// many links were rewritten.
    fn rewrite_links(
        &mut self,
        marker: &str,
        rewrite: &mut dyn FnMut(&str) -> Option<String>,
    ) -> usize;
}

/// Initialize `page` for the session's active jurisdiction.
///
/// Links that already carry a `jurisdiction=` parameter are left alone.
/// Returns the active configuration.
pub fn initialize<'r, S, P>(session: &JurisdictionSession<'r, S>, page: &mut P) -> &'r JurisdictionConfig
where
    S: SelectionStore,
    P: PageAdapter + ?Sized,
{
    let config = session.config();
    let stamped = page.set_text_by_class(&CURRENCY_CLASSES, &config.currency.symbol);

    let carried = format!("{JURISDICTION_PARAM}=");
    let rewritten = page.rewrite_links(PAGE_LINK_MARKER, &mut |href: &str| {
        if href.contains(&carried) {
            None
        } else {
            Some(session.append_jurisdiction_to_url(href))
        }
    });

    tracing::info!(
        jurisdiction = %config.code,
        name = %config.name,
        currency_symbols = stamped,
        links = rewritten,
        "initialized with jurisdiction"
    );
    config
}

// ---------------------------------------------------------------------------
// In-memory page
// ---------------------------------------------------------------------------

/// A text element with a class list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
    pub classes: Vec<String>,
    pub text: String,
}

/// An anchor with its href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub href: String,
}

/// A minimal page model: flat lists of elements and links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPage {
    pub elements: Vec<PageElement>,
    pub links: Vec<PageLink>,
}

impl StaticPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element. `classes` is a space-separated class attribute.
    pub fn with_element(mut self, classes: &str, text: &str) -> Self {
        self.elements.push(PageElement {
            classes: classes.split_whitespace().map(str::to_string).collect(),
            text: text.to_string(),
        });
        self
    }

    pub fn with_link(mut self, href: &str) -> Self {
        self.links.push(PageLink {
            href: href.to_string(),
        });
        self
    }

    /// Current hrefs in document order.
    pub fn hrefs(&self) -> Vec<&str> {
        self.links.iter().map(|l| l.href.as_str()).collect()
    }
}

impl PageAdapter for StaticPage {
    fn set_text_by_class(&mut self, classes: &[&str], text: &str) -> usize {
        let mut updated = 0;
        for element in &mut self.elements {
            if element.classes.iter().any(|c| classes.contains(&c.as_str())) {
                element.text = text.to_string();
                updated += 1;
            }
        }
        updated
    }

    fn rewrite_links(
        &mut self,
        marker: &str,
        rewrite: &mut dyn FnMut(&str) -> Option<String>,
    ) -> usize {
        let mut rewritten = 0;
        for link in self.links.iter_mut().filter(|l| l.href.contains(marker)) {
            if let Some(href) = rewrite(&link.href) {
                link.href = href;
                rewritten += 1;
            }
        }
        rewritten
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySelectionStore;
    use evelyn_pack::JurisdictionRegistry;

    #[test]
    fn static_page_matches_any_listed_class() {
        let mut page = StaticPage::new()
            .with_element("amount currency-prefix", "?")
            .with_element("currency-symbol", "?")
            .with_element("currency", "?");
        let updated = page.set_text_by_class(&CURRENCY_CLASSES, "€");
        assert_eq!(updated, 2);
        assert_eq!(page.elements[2].text, "?");
    }

    #[test]
    fn static_page_only_visits_marked_links() {
        let mut page = StaticPage::new()
            .with_link("next.html")
            .with_link("https://example.com/help");
        let mut seen = Vec::new();
        page.rewrite_links(".html", &mut |href: &str| {
            seen.push(href.to_string());
            None
        });
        assert_eq!(seen, ["next.html"]);
    }

    #[test]
    fn initialize_returns_active_config() {
        let registry = JurisdictionRegistry::builtin().unwrap();
        let session = JurisdictionSession::new(registry, MemorySelectionStore::new(), Some("IE"));
        let mut page = StaticPage::new();
        let config = initialize(&session, &mut page);
        assert_eq!(config.name, "Ireland");
    }
}
