// Chunk: docs/chunks/minimap_engine - Dimension recalculation on buffer updates

//! The minimap engine.
//!
//! `Minimap` ties the line index to the canvas sizer. The host calls
//! [`Minimap::update_dimensions`] after every buffer change and reads the
//! dimensions, canvas, and offset lookups in between. Nothing here knows about
//! the host editor; the host adapts its own events into these calls.
//!
//! Updates are all-or-nothing: the new index is built and the canvas resized
//! before any state is replaced, so a failed update leaves the previous
//! snapshot in place.

use glance_index::{FoldRange, LineIndex, LineRecord};

use crate::canvas::Canvas;
use crate::config::GlanceConfig;
use crate::error::GlanceError;
use crate::sizer::{CanvasDimensions, CanvasSizer, ResizeOutcome};

pub struct Minimap {
    config: GlanceConfig,
    index: LineIndex,
    sizer: CanvasSizer,
}

impl Minimap {
    /// Creates an engine with an empty index and no canvas yet.
    pub fn new(config: GlanceConfig) -> Result<Self, GlanceError> {
        config.validate()?;
        Ok(Self {
            config,
            index: LineIndex::new(),
            sizer: CanvasSizer::new(),
        })
    }

    pub fn config(&self) -> &GlanceConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect on the next update.
    pub fn set_config(&mut self, config: GlanceConfig) -> Result<(), GlanceError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Re-indexes `text` and resizes the canvas to fit.
    pub fn update_dimensions(
        &mut self,
        text: &str,
        folds: &[FoldRange],
    ) -> Result<ResizeOutcome, GlanceError> {
        self.apply(LineIndex::build(text, folds))
    }

    /// Like [`update_dimensions`](Self::update_dimensions) for UTF-16 text;
    /// offsets and folds are in code units.
    pub fn update_dimensions_utf16(
        &mut self,
        units: &[u16],
        folds: &[FoldRange],
    ) -> Result<ResizeOutcome, GlanceError> {
        self.apply(LineIndex::build_utf16(units, folds))
    }

    fn apply(&mut self, index: LineIndex) -> Result<ResizeOutcome, GlanceError> {
        let outcome = self.sizer.resize(
            index.rendered_line_count(),
            self.config.pixels_per_line,
            self.config.width,
        )?;
        self.index = index;
        Ok(outcome)
    }

    /// Returns the line holding `offset`, clamped into the buffer.
    pub fn line_at(&self, offset: isize) -> LineRecord {
        self.index.line_at(offset)
    }

    /// Returns the top pixel row of the line holding `offset`.
    pub fn y_offset_of(&self, offset: isize) -> usize {
        (self.line_at(offset).number - 1).saturating_mul(self.config.pixels_per_line)
    }

    /// Returns the rendered line drawn at pixel row `y`, clamped to the last line.
    pub fn line_at_y(&self, y: usize) -> LineRecord {
        self.index
            .rendered_line((y / self.config.pixels_per_line).saturating_add(1))
    }

    pub fn index(&self) -> &LineIndex {
        &self.index
    }

    pub fn dimensions(&self) -> Option<CanvasDimensions> {
        self.sizer.dimensions()
    }

    /// Canvas width, or 0 before the first update.
    pub fn width(&self) -> usize {
        self.dimensions().map_or(0, |d| d.width)
    }

    /// Content height in pixels, or 0 before the first update.
    pub fn height(&self) -> usize {
        self.dimensions().map_or(0, |d| d.height)
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.sizer.canvas()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimap() -> Minimap {
        Minimap::new(GlanceConfig {
            pixels_per_line: 2,
            width: 110,
        })
        .unwrap()
    }

    // ==================== Dimensions ====================

    #[test]
    fn test_calculate_dimensions() {
        let cases = [
            ("", 2),
            ("SingleLine", 2),
            ("Multi\nLine", 4),
            ("Line with lots of tabs\n\t\t\t\t\t\t\t\t", 4),
            ("ʳʳʳʳ", 2),
            ("ꬉꬉꬉꬉ", 2),
        ];
        for (text, height) in cases {
            let mut map = minimap();
            map.update_dimensions(text, &[]).unwrap();
            assert_eq!(map.height(), height, "text {:?}", text);
        }
    }

    #[test]
    fn test_calculate_dimensions_resize() {
        let mut map = minimap();
        map.update_dimensions("ASDF\nHJKL", &[]).unwrap();
        let canvas = map.canvas().unwrap();
        assert_eq!(canvas.width(), 110);
        assert_eq!(canvas.capacity_height(), 204);

        // Only added a little, so the canvas is kept.
        let outcome = map
            .update_dimensions("asdfjkl;asdfjkl;\nasdfjlkasdfjkl\nasdfjkl;a;sdfjkl", &[])
            .unwrap();
        assert_eq!(outcome, ResizeOutcome::Reused);
        assert_eq!(map.canvas().unwrap().capacity_height(), 204);

        // Past the existing capacity, so a new canvas is created.
        let outcome = map.update_dimensions(&"\na".repeat(150), &[]).unwrap();
        assert_eq!(outcome, ResizeOutcome::Reallocated);
        assert_eq!(map.canvas().unwrap().width(), 110);
        assert_eq!(map.canvas().unwrap().capacity_height(), 502);
        assert_eq!(map.height(), 302);
    }

    #[test]
    fn test_folds_reduce_height() {
        let mut map = minimap();
        map.update_dimensions("a\nb\nc\nd", &[]).unwrap();
        assert_eq!(map.height(), 8);
        map.update_dimensions("a\nb\nc\nd", &[FoldRange::new(1, 5)]).unwrap();
        assert_eq!(map.height(), 4);
    }

    #[test]
    fn test_utf16_update() {
        let units: Vec<u16> = "\u{1F600}\nx".encode_utf16().collect();
        let mut map = minimap();
        map.update_dimensions_utf16(&units, &[]).unwrap();
        assert_eq!(map.height(), 4);
        assert_eq!(map.line_at(3).number, 2);
    }

    // ==================== Lookup ====================

    #[test]
    fn test_line_at_before_first_update() {
        let map = minimap();
        assert_eq!(map.line_at(5), LineRecord::new(1, 0, 0, 0));
        assert_eq!(map.height(), 0);
        assert!(map.canvas().is_none());
    }

    #[test]
    fn test_y_offset_round_trip() {
        let mut map = minimap();
        map.update_dimensions("one\ntwo\nthree", &[]).unwrap();
        assert_eq!(map.y_offset_of(0), 0);
        assert_eq!(map.y_offset_of(5), 2);
        assert_eq!(map.y_offset_of(9), 4);
        assert_eq!(map.line_at_y(0).number, 1);
        assert_eq!(map.line_at_y(3).number, 2);
        assert_eq!(map.line_at_y(1000).number, 3);
    }

    #[test]
    fn test_line_at_y_bottom_of_range() {
        let mut map = Minimap::new(GlanceConfig {
            pixels_per_line: 1,
            width: 110,
        })
        .unwrap();
        map.update_dimensions("a\nb", &[]).unwrap();
        assert_eq!(map.line_at_y(usize::MAX), LineRecord::new(2, 2, 2, 1));
    }

    #[test]
    fn test_y_offset_with_unapplied_scale() {
        let mut map = minimap();
        map.update_dimensions("a\nb\nc\nd", &[]).unwrap();
        map.set_config(GlanceConfig {
            pixels_per_line: usize::MAX / 2,
            width: 110,
        })
        .unwrap();
        assert_eq!(map.y_offset_of(6), usize::MAX);
    }

    // ==================== Failed updates ====================

    #[test]
    fn test_failed_update_keeps_previous_snapshot() {
        let mut map = minimap();
        map.update_dimensions("a\nb", &[]).unwrap();

        map.set_config(GlanceConfig {
            pixels_per_line: usize::MAX / 2,
            width: 110,
        })
        .unwrap();
        let err = map.update_dimensions("a\nb\nc\nd", &[]).unwrap_err();
        assert!(matches!(err, GlanceError::CanvasTooLarge { width: 110, .. }));

        // Index, dimensions and canvas all still describe "a\nb".
        assert_eq!(map.index().rendered_line_count(), 2);
        assert_eq!(map.index().len(), 3);
        assert_eq!(map.height(), 4);
        assert_eq!(map.canvas().unwrap().capacity_height(), 204);
        assert_eq!(map.line_at(2), LineRecord::new(2, 2, 2, 1));
        assert_eq!(map.line_at(6), LineRecord::new(2, 2, 2, 1));
    }

    // ==================== Configuration ====================

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GlanceConfig {
            pixels_per_line: 0,
            width: 110,
        };
        assert!(Minimap::new(config).is_err());
    }

    #[test]
    fn test_set_config_applies_on_next_update() {
        let mut map = minimap();
        map.update_dimensions("a\nb", &[]).unwrap();
        assert_eq!(map.height(), 4);

        map.set_config(GlanceConfig {
            pixels_per_line: 3,
            width: 110,
        })
        .unwrap();
        assert_eq!(map.height(), 4);

        let outcome = map.update_dimensions("a\nb", &[]).unwrap();
        assert_eq!(outcome, ResizeOutcome::Reused);
        assert_eq!(map.height(), 6);
    }

    #[test]
    fn test_width_change_reallocates() {
        let mut map = minimap();
        map.update_dimensions("a", &[]).unwrap();
        map.set_config(GlanceConfig {
            pixels_per_line: 2,
            width: 64,
        })
        .unwrap();
        let outcome = map.update_dimensions("a", &[]).unwrap();
        assert!(outcome.is_reallocated());
        assert_eq!(map.width(), 64);
        assert_eq!(map.canvas().unwrap().pixels().len(), 64 * 202);
    }

    #[test]
    fn test_rejected_config_keeps_previous() {
        let mut map = minimap();
        let bad = GlanceConfig {
            pixels_per_line: 2,
            width: 0,
        };
        assert!(map.set_config(bad).is_err());
        assert_eq!(map.config().width, 110);
    }
}
