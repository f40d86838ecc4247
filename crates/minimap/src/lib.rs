// Chunk: docs/chunks/minimap_engine - Dimension recalculation on buffer updates
// Chunk: docs/chunks/canvas_sizing - Amortized canvas growth for the minimap image

//! glance-minimap: dimension recalculation for a code minimap.
//!
//! On every buffer update the host hands the current text and its folded
//! regions to a [`Minimap`]. The engine rebuilds the line index, computes the
//! rendered height (`rendered lines × pixels_per_line`), and keeps a backing
//! [`Canvas`] that is reused across small edits and regrown with headroom when
//! the content outgrows it.
//!
//! # Example
//!
//! ```
//! use glance_minimap::{GlanceConfig, Minimap, ResizeOutcome};
//!
//! let mut minimap = Minimap::new(GlanceConfig { pixels_per_line: 2, width: 110 })?;
//!
//! let outcome = minimap.update_dimensions("fn main() {\n}\n", &[])?;
//! assert_eq!(outcome, ResizeOutcome::Reallocated);
//! assert_eq!(minimap.height(), 6);
//!
//! // Typing a line stays within the canvas headroom.
//! let outcome = minimap.update_dimensions("fn main() {\n    run();\n}\n", &[])?;
//! assert_eq!(outcome, ResizeOutcome::Reused);
//! assert_eq!(minimap.line_at(14).number, 2);
//! # Ok::<(), glance_minimap::GlanceError>(())
//! ```
//!
//! # Ownership
//!
//! The canvas is owned by the [`CanvasSizer`] inside the engine. Renderers
//! read it through [`Minimap::canvas`] between updates; after a
//! [`ResizeOutcome::Reallocated`] its contents are blank and must be repainted.

mod canvas;
mod config;
mod error;
mod minimap;
mod sizer;

pub use canvas::Canvas;
pub use config::GlanceConfig;
pub use error::GlanceError;
pub use minimap::Minimap;
pub use sizer::{
    grown_capacity, plan_resize, CanvasDimensions, CanvasSizer, ResizeDecision, ResizeOutcome,
    HEADROOM_LINES,
};

pub use glance_index::{FoldRange, LineIndex, LineRecord};
