//! # evelyn-session: Active Jurisdiction and Helpers
//!
//! Everything that depends on *which* jurisdiction is active. The active
//! selection is not ambient: it lives in a [`JurisdictionSession`], which
//! borrows the read-only registry and owns the single-slot
//! [`SelectionStore`]. Every helper is a method on the session.
//!
//! ## Resolution order
//!
//! ```text
//! request parameter ──(valid)──▶ active, and persisted (sticky)
//!        │ absent / unknown
//!        ▼
//! persisted selection ──(valid)──▶ active
//!        │ absent / unknown
//!        ▼
//!       UK
//! ```
//!
//! ## Modules
//!
//! - `resolve.rs`: the pure resolution function.
//! - `store.rs`: the `evelynJurisdiction` storage slot, in memory or on disk.
//! - `request.rs`: reading the `jurisdiction` parameter, stamping URLs.
//! - `session.rs`: the helper surface.
//! - `page.rs`: page initialization behind the [`PageAdapter`] trait.
//!
//! ## Crate Policy
//!
//! - Helpers never return errors. Unknown codes fall back, bad numbers
//!   format as zero, bad identifiers fail the predicate.
//! - Page mutation only happens through [`PageAdapter`].

pub mod error;
pub mod page;
pub mod request;
pub mod resolve;
pub mod session;
pub mod store;

pub use error::StoreError;
pub use page::{initialize, PageAdapter, StaticPage, CURRENCY_CLASSES, PAGE_LINK_MARKER};
pub use request::{
    append_jurisdiction_param, jurisdiction_param, jurisdiction_param_from_address,
    JURISDICTION_PARAM,
};
pub use resolve::{resolve, Resolution, ResolutionSource};
pub use session::JurisdictionSession;
pub use store::{FileSelectionStore, MemorySelectionStore, SelectionStore, STORAGE_KEY};
