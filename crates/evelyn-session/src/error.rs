//! # Store Errors
//!
//! Failures reading or writing the persisted selection file. The
//! [`SelectionStore`](crate::SelectionStore) trait itself is infallible:
//! these surface only through the explicit `try_*` methods, and are
//! logged and swallowed on the trait path.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from [`FileSelectionStore`](crate::FileSelectionStore).
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the slot file failed.
    #[error("selection store io error at {path}: {source}")]
    Io {
        /// The slot file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The slot file is not a JSON object of strings.
    #[error("selection store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
