// Chunk: docs/chunks/glance_config - Explicit minimap configuration

//! Minimap configuration.
//!
//! The engine takes a `GlanceConfig` at construction and can be handed a new
//! one at any time; nothing here is global. Loading the document from disk
//! belongs to the host.

use serde::{Deserialize, Serialize};

use crate::error::GlanceError;

/// Rendering scale for the minimap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlanceConfig {
    /// Vertical pixels per rendered line.
    pub pixels_per_line: usize,
    /// Fixed canvas width in pixels.
    pub width: usize,
}

impl GlanceConfig {
    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, GlanceError> {
        let config: GlanceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GlanceError> {
        if self.pixels_per_line == 0 {
            return Err(GlanceError::InvalidConfig {
                field: "pixels_per_line",
                value: self.pixels_per_line,
            });
        }
        if self.width == 0 {
            return Err(GlanceError::InvalidConfig {
                field: "width",
                value: self.width,
            });
        }
        Ok(())
    }
}

impl Default for GlanceConfig {
    fn default() -> Self {
        Self {
            pixels_per_line: 2,
            width: 110,
        }
    }
}
