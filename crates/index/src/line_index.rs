// Chunk: docs/chunks/line_index - Fold-aware line index with clamped offset lookup

//! Line index for mapping text offsets to rendered lines.
//!
//! The index is rebuilt from scratch on every update with one linear scan over
//! the text. Each rendered line becomes a [`LineRecord`]; lines hidden inside a
//! fold are merged into the record that holds the fold start, so lookups inside
//! folded text land on the fold's single rendered line.
//!
//! # Record boundaries
//!
//! - A newline-terminated line ends at its newline.
//! - The final line, when it has content, ends at its last character.
//! - A buffer ending in a newline carries a trailing empty record at `len`.
//!   It counts toward the rendered height but lookups never return it, since
//!   offsets address characters and are clamped to `len - 1`.

use std::time::Instant;

use crate::fold::{FoldCursor, FoldRange};
use crate::types::LineRecord;

/// Ordered line records for one snapshot of the buffer.
///
/// Records are sorted by `begin` with strictly increasing begins, so lookup is
/// a binary search. There is always at least one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    records: Vec<LineRecord>,
    /// Length of the indexed text in offset units.
    len: usize,
    /// Newline-delimited lines before fold merging.
    source_lines: usize,
    max_width: usize,
}

impl LineIndex {
    /// Creates the index of an empty buffer: a single empty line.
    pub fn new() -> Self {
        Self {
            records: vec![LineRecord::new(1, 0, 0, 0)],
            len: 0,
            source_lines: 1,
            max_width: 0,
        }
    }

    /// Builds the index for `text`, with offsets counted in `char`s.
    pub fn build(text: &str, folds: &[FoldRange]) -> Self {
        Self::scan(text.chars().map(|ch| (ch, 1)), folds)
    }

    /// Builds the index for UTF-16 `units`, with offsets counted in code units.
    ///
    /// Line widths still count codepoints: a surrogate pair is one unit of
    /// width. Unpaired surrogates count as one codepoint each.
    pub fn build_utf16(units: &[u16], folds: &[FoldRange]) -> Self {
        let chars = char::decode_utf16(units.iter().copied()).map(|decoded| match decoded {
            Ok(ch) => (ch, ch.len_utf16()),
            Err(_) => (char::REPLACEMENT_CHARACTER, 1),
        });
        Self::scan(chars, folds)
    }

    /// Single pass over `(char, unit_len)` pairs.
    fn scan<I>(chars: I, folds: &[FoldRange]) -> Self
    where
        I: IntoIterator<Item = (char, usize)>,
    {
        let started = Instant::now();
        let mut folds = FoldCursor::new(folds);
        let mut records = Vec::new();
        let mut source_lines = 1;
        let mut max_width = 0;

        let mut begin = 0;
        let mut width = 0;
        let mut offset = 0;
        for (ch, units) in chars {
            if ch == '\n' {
                source_lines += 1;
                let next = offset + units;
                if !folds.hides(next) {
                    max_width = max_width.max(width);
                    records.push(LineRecord::new(records.len() + 1, begin, offset, width));
                    begin = next;
                    width = 0;
                }
            } else {
                width += 1;
            }
            offset += units;
        }

        let len = offset;
        let end = if begin < len { len - 1 } else { len };
        max_width = max_width.max(width);
        records.push(LineRecord::new(records.len() + 1, begin, end, width));

        tracing::debug!(
            len,
            source_lines,
            rendered_lines = records.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "rebuilt line index"
        );

        Self {
            records,
            len,
            source_lines,
            max_width,
        }
    }

    /// Returns the length of the indexed text in offset units.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the indexed text was empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns all records in offset order.
    pub fn records(&self) -> &[LineRecord] {
        &self.records
    }

    /// Returns the number of rendered lines (always at least 1).
    pub fn rendered_line_count(&self) -> usize {
        self.records.len()
    }

    /// Returns the number of newline-delimited lines, ignoring folds.
    pub fn line_count(&self) -> usize {
        self.source_lines
    }

    /// Returns the widest rendered line in codepoints.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Returns the record with the given 1-based rendered line number.
    pub fn line(&self, number: usize) -> Option<LineRecord> {
        self.records.get(number.checked_sub(1)?).copied()
    }

    /// Returns the record with the given rendered line number, clamped into
    /// `1..=rendered_line_count()`.
    pub fn rendered_line(&self, number: usize) -> LineRecord {
        let idx = number.saturating_sub(1).min(self.records.len() - 1);
        self.records[idx]
    }

    /// Returns the line containing `offset`.
    ///
    /// Never fails: negative offsets resolve to the first line and offsets at
    /// or past the end of the text resolve to the line holding the last
    /// character. An offset on a newline belongs to the line it terminates.
    ///
    /// Uses binary search for O(log n) lookup.
    pub fn line_at(&self, offset: isize) -> LineRecord {
        let target = self.clamp_offset(offset);
        if target as isize != offset {
            tracing::trace!(offset, target, "clamped line lookup");
        }
        let idx = self
            .records
            .partition_point(|record| record.begin <= target)
            .saturating_sub(1);
        self.records[idx]
    }

    fn clamp_offset(&self, offset: isize) -> usize {
        if offset <= 0 {
            0
        } else {
            (offset as usize).min(self.len.saturating_sub(1))
        }
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
