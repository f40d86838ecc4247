// Chunk: docs/chunks/canvas_sizing - Amortized canvas growth for the minimap image

//! Canvas sizing with amortized growth.
//!
//! The minimap image is reused across edits for as long as the content fits.
//! When it no longer fits, a new canvas is allocated with headroom so that the
//! next few lines typed do not trigger another allocation.
//!
//! The decision itself is the pure function [`plan_resize`]; [`CanvasSizer`]
//! applies it to the owned [`Canvas`].
//!
//! # Growth policy
//!
//! `capacity = height + max(HEADROOM_LINES * pixels_per_line, height / 2)`.
//! Small buffers get room for another hundred lines at the current scale;
//! large buffers grow by half again. Capacity never shrinks.

use crate::canvas::Canvas;
use crate::error::GlanceError;

/// Minimum spare rendered lines added on every reallocation.
pub const HEADROOM_LINES: usize = 100;

/// Logical content size and the capacity of the storage backing it.
///
/// Invariant: `capacity_height >= height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasDimensions {
    pub width: usize,
    pub height: usize,
    pub capacity_height: usize,
}

/// Outcome of [`plan_resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDecision {
    /// The current storage holds the requested height at the requested width.
    Fits,
    /// New storage of `capacity` rows is required.
    Grow { capacity: usize },
}

/// What happened to the canvas during a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// The existing canvas was kept; its contents are intact.
    Reused,
    /// A fresh canvas replaced the old one and must be repainted.
    Reallocated,
}

impl ResizeOutcome {
    pub fn is_reallocated(&self) -> bool {
        matches!(self, ResizeOutcome::Reallocated)
    }
}

/// Returns the capacity to allocate for a content `height`, always strictly
/// greater than `height`.
///
/// Returns `None` when the headroom does not fit in `usize`.
pub fn grown_capacity(height: usize, pixels_per_line: usize) -> Option<usize> {
    let headroom = HEADROOM_LINES
        .saturating_mul(pixels_per_line)
        .max(height / 2)
        .max(1);
    height.checked_add(headroom)
}

/// Decides whether `current` can hold `height` rows at `width`.
pub fn plan_resize(
    current: Option<&CanvasDimensions>,
    height: usize,
    width: usize,
    pixels_per_line: usize,
) -> Result<ResizeDecision, GlanceError> {
    match current {
        Some(dims) if dims.width == width && dims.capacity_height >= height => {
            Ok(ResizeDecision::Fits)
        }
        _ => grown_capacity(height, pixels_per_line)
            .map(|capacity| ResizeDecision::Grow { capacity })
            .ok_or(GlanceError::CanvasTooLarge { width, height }),
    }
}

/// Owns the minimap canvas and keeps it large enough for the content.
#[derive(Debug, Default)]
pub struct CanvasSizer {
    dimensions: Option<CanvasDimensions>,
    canvas: Option<Canvas>,
}

impl CanvasSizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimensions(&self) -> Option<CanvasDimensions> {
        self.dimensions
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Sizes the canvas for `rendered_line_count` lines.
    ///
    /// At least one line is always reserved. On error the previous canvas and
    /// dimensions are left untouched.
    pub fn resize(
        &mut self,
        rendered_line_count: usize,
        pixels_per_line: usize,
        width: usize,
    ) -> Result<ResizeOutcome, GlanceError> {
        let lines = rendered_line_count.max(1);
        let height = lines
            .checked_mul(pixels_per_line)
            .ok_or(GlanceError::CanvasTooLarge {
                width,
                height: usize::MAX,
            })?;

        match plan_resize(self.dimensions.as_ref(), height, width, pixels_per_line)? {
            ResizeDecision::Fits => {
                if let Some(dims) = self.dimensions.as_mut() {
                    dims.height = height;
                }
                tracing::trace!(height, "canvas reused");
                Ok(ResizeOutcome::Reused)
            }
            ResizeDecision::Grow { capacity } => {
                let canvas = Canvas::allocate(width, capacity)?;
                tracing::debug!(
                    width,
                    height,
                    old_capacity = self.dimensions.map(|d| d.capacity_height),
                    new_capacity = capacity,
                    "canvas reallocated"
                );
                self.canvas = Some(canvas);
                self.dimensions = Some(CanvasDimensions {
                    width,
                    height,
                    capacity_height: capacity,
                });
                Ok(ResizeOutcome::Reallocated)
            }
        }
    }
}
