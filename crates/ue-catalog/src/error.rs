//! Catalog error type.

use thiserror::Error;

/// Reasons a catalog cannot seed the generators.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("prefecture {0:?} has no bounds")]
    MissingBounds(String),

    #[error("prefecture {0:?} has no bounds.center")]
    MissingCenter(String),

    #[error("prefecture {0:?} has no cities")]
    NoCities(String),

    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
