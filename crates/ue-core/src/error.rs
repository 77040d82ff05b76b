//! Workspace error type.
//!
//! Sub-crates define their own error enums and either wrap `UeError` as one
//! variant or keep them separate; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `ue-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum UeError {
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ue-*` crates.
pub type UeResult<T> = Result<T, UeError>;
