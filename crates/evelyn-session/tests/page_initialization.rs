//! # Page Initialization
//!
//! Drives `initialize` against the in-memory page model.

use std::io::Write;

use evelyn_pack::JurisdictionRegistry;
use evelyn_session::{
    initialize, FileSelectionStore, JurisdictionSession, MemorySelectionStore, StaticPage,
};
use url::Url;

fn sample_page() -> StaticPage {
    StaticPage::new()
        .with_element("currency-symbol", "£")
        .with_element("input-addon currency-prefix", "£")
        .with_element("label", "Amount")
        .with_link("fact-find-02-income.html")
        .with_link("fact-find-03-assets.html?section=property")
        .with_link("kyc.html?jurisdiction=UK")
        .with_link("https://www.revenue.ie")
}

#[test]
fn stamps_symbols_and_carries_jurisdiction_forward() {
    let registry = JurisdictionRegistry::builtin().unwrap();
    let page_url = Url::parse("https://portal.test/fact-find-01.html?jurisdiction=ie").unwrap();
    let session = JurisdictionSession::from_url(registry, MemorySelectionStore::new(), &page_url);

    let mut page = sample_page();
    let config = initialize(&session, &mut page);

    assert_eq!(config.code.as_str(), "IE");
    assert_eq!(page.elements[0].text, "€");
    assert_eq!(page.elements[1].text, "€");
    assert_eq!(page.elements[2].text, "Amount");
    assert_eq!(
        page.hrefs(),
        [
            "fact-find-02-income.html?jurisdiction=IE",
            "fact-find-03-assets.html?section=property&jurisdiction=IE",
            "kyc.html?jurisdiction=UK",
            "https://www.revenue.ie",
        ]
    );
}

#[test]
fn second_initialization_does_not_double_stamp() {
    let registry = JurisdictionRegistry::builtin().unwrap();
    let session = JurisdictionSession::new(registry, MemorySelectionStore::new(), None);

    let mut page = sample_page();
    initialize(&session, &mut page);
    let once = page.clone();
    initialize(&session, &mut page);
    assert_eq!(page, once);
    assert_eq!(page.links[0].href, "fact-find-02-income.html?jurisdiction=UK");
}

#[test]
fn persisted_file_selection_drives_next_page() {
    let registry = JurisdictionRegistry::builtin().unwrap();
    let mut slot = tempfile::NamedTempFile::new().unwrap();
    slot.write_all(br#"{"evelynJurisdiction": "IE"}"#).unwrap();

    let store = FileSelectionStore::new(slot.path());
    let session = JurisdictionSession::new(registry, store, None);

    let mut page = sample_page();
    let config = initialize(&session, &mut page);
    assert_eq!(config.currency.code, "EUR");
    assert_eq!(page.links[0].href, "fact-find-02-income.html?jurisdiction=IE");
}

#[test]
fn request_parameter_rewrites_file_slot() {
    let registry = JurisdictionRegistry::builtin().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selection.json");

    let page_url = Url::parse("https://portal.test/index.html?jurisdiction=IE").unwrap();
    JurisdictionSession::from_url(registry, FileSelectionStore::new(&path), &page_url);

    let next = JurisdictionSession::new(registry, FileSelectionStore::new(&path), None);
    assert_eq!(next.jurisdiction().as_str(), "IE");
}
