use thiserror::Error;
use tracing::debug;

/// Message fragments of renderer errors that are harmless to ignore.
const TRANSIENT: &[&str] = &[
    "already exists",
    "does not exist",
    "not found",
    "style is not done loading",
];

#[derive(Debug, Error)]
pub enum MapError {
    /// Error reported by the renderer, carried verbatim.
    #[error("map renderer: {0}")]
    Renderer(String),

    #[error("layer '{layer}' references unknown source '{source_id}'")]
    MissingSource { layer: String, source_id: String },
}

impl MapError {
    /// Errors the dashboard deliberately swallows: duplicate adds, removals
    /// of things already gone, and calls made before the style is ready.
    pub fn is_transient(&self) -> bool {
        match self {
            MapError::Renderer(msg) => TRANSIENT.iter().any(|t| msg.contains(t)),
            MapError::MissingSource { .. } => false,
        }
    }
}

pub type MapResult<T> = Result<T, MapError>;

/// Swallow transient errors with a debug line; pass everything else up.
pub fn tolerate(result: MapResult<()>) -> MapResult<()> {
    match result {
        Err(e) if e.is_transient() => {
            debug!(error = %e, "transient map error ignored");
            Ok(())
        }
        other => other,
    }
}
