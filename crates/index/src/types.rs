// Chunk: docs/chunks/line_index - Fold-aware line index with clamped offset lookup

/// One rendered line of the buffer, as produced by [`LineIndex`](crate::LineIndex).
///
/// Offsets are in the units of the indexed text: `char`s for `&str` input,
/// UTF-16 code units for `&[u16]` input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRecord {
    /// Rendered line ordinal, starting at 1.
    pub number: usize,
    /// Offset of the first character of the line.
    pub begin: usize,
    /// Offset of the terminating newline, or of the last character when the
    /// line runs to the end of the buffer.
    pub end: usize,
    /// Content width in codepoints, newlines excluded.
    pub width: usize,
}

impl LineRecord {
    pub fn new(number: usize, begin: usize, end: usize, width: usize) -> Self {
        Self {
            number,
            begin,
            end,
            width,
        }
    }

    /// Returns true if `offset` lies in `[begin, end]`.
    pub fn contains(&self, offset: usize) -> bool {
        self.begin <= offset && offset <= self.end
    }
}
