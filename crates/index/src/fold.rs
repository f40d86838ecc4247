// Chunk: docs/chunks/fold_merging - Collapse folded regions into one rendered line

//! Fold ranges and the forward-only cursor used while scanning.
//!
//! A fold collapses a span of the buffer into a single rendered line. The
//! host hands us disjoint `[start, end)` ranges; overlapping ranges are a
//! caller error and are not validated.

use std::ops::Range;

/// A collapsed region of the buffer, `[start, end)` in text offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FoldRange {
    pub start: usize,
    pub end: usize,
}

impl FoldRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns true if the range covers no offsets (including inverted ranges).
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns true if `offset` lies strictly between `start` and `end`.
    ///
    /// A line beginning at such an offset is hidden inside the fold.
    pub fn hides(&self, offset: usize) -> bool {
        self.start < offset && offset < self.end
    }
}

impl From<Range<usize>> for FoldRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Walks a sorted copy of the folds alongside a monotonically increasing offset.
///
/// Each query is amortized O(1) because the cursor never moves backwards.
pub(crate) struct FoldCursor {
    folds: Vec<FoldRange>,
    next: usize,
}

impl FoldCursor {
    pub(crate) fn new(folds: &[FoldRange]) -> Self {
        let mut folds: Vec<FoldRange> = folds.iter().copied().filter(|f| !f.is_empty()).collect();
        folds.sort_unstable_by_key(|f| f.start);
        Self { folds, next: 0 }
    }

    /// Returns true if a line starting at `offset` is absorbed by a fold.
    ///
    /// `offset` must not decrease between calls.
    pub(crate) fn hides(&mut self, offset: usize) -> bool {
        while let Some(fold) = self.folds.get(self.next) {
            if fold.end <= offset {
                self.next += 1;
            } else {
                return fold.hides(offset);
            }
        }
        false
    }
}
