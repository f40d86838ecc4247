// Chunk: docs/chunks/canvas_sizing - Amortized canvas growth for the minimap image

//! Backing pixel storage for the minimap image.
//!
//! A `Canvas` is allocated once per growth step and then reused for as long as
//! the content fits. Only `CanvasSizer` creates canvases; renderers read them.

use std::mem;

use crate::error::GlanceError;

/// Row-major ARGB pixel storage of `width × capacity_height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    capacity_height: usize,
    pixels: Vec<u32>,
}

impl Canvas {
    /// Allocates a zero-filled canvas.
    ///
    /// Allocation failure is reported rather than aborting, so the caller can
    /// keep its previous canvas.
    pub(crate) fn allocate(width: usize, capacity_height: usize) -> Result<Self, GlanceError> {
        let len = width
            .checked_mul(capacity_height)
            .ok_or(GlanceError::CanvasTooLarge {
                width,
                height: capacity_height,
            })?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|source| GlanceError::Allocation {
                bytes: len.saturating_mul(mem::size_of::<u32>()),
                source,
            })?;
        pixels.resize(len, 0);

        Ok(Self {
            width,
            capacity_height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the allocated storage, which may exceed the content height.
    pub fn capacity_height(&self) -> usize {
        self.capacity_height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Returns one row of pixels, or `None` past the capacity.
    pub fn row(&self, y: usize) -> Option<&[u32]> {
        if y >= self.capacity_height {
            return None;
        }
        let start = y * self.width;
        Some(&self.pixels[start..start + self.width])
    }
}
