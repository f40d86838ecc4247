// Chunk: docs/chunks/canvas_sizing - Amortized canvas growth for the minimap image

//! Error type for the minimap engine.
//!
//! Offset lookups never fail (they clamp), so the only failures are bad
//! configuration and the canvas storage itself.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlanceError {
    #[error("invalid config: {field} must be greater than zero (got {value})")]
    InvalidConfig { field: &'static str, value: usize },

    #[error("invalid config document: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("canvas of {width}x{height} pixels does not fit in memory")]
    CanvasTooLarge { width: usize, height: usize },

    #[error("failed to allocate {bytes} bytes for canvas storage")]
    Allocation {
        bytes: usize,
        #[source]
        source: TryReserveError,
    },
}
