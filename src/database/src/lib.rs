pub mod loaders;

pub use loaders::*;

use std::path::PathBuf;
use thiserror::Error;

/// File-level ingestion failure. Row-level problems are collected on the
/// loaded result instead, see `RosterFile`.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}
