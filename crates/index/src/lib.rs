// Chunk: docs/chunks/line_index - Fold-aware line index with clamped offset lookup
// Chunk: docs/chunks/fold_merging - Collapse folded regions into one rendered line

//! glance-index: the line index behind the glance minimap.
//!
//! This crate turns a snapshot of buffer text plus the host's fold ranges into
//! an ordered list of rendered lines, and answers "which line holds this
//! offset?" in O(log n).
//!
//! # Overview
//!
//! The main type is [`LineIndex`], which provides:
//! - A single-pass rebuild from `&str` or UTF-16 text
//! - Fold merging: lines hidden inside a [`FoldRange`] join the fold's line
//! - Clamped offset lookup that never fails
//! - Per-line widths counted in codepoints
//!
//! # Example
//!
//! ```
//! use glance_index::{FoldRange, LineIndex};
//!
//! let index = LineIndex::build("fn main() {\n    body();\n}\n", &[]);
//! assert_eq!(index.rendered_line_count(), 4);
//!
//! let line = index.line_at(15);
//! assert_eq!((line.number, line.begin, line.end), (2, 12, 23));
//!
//! // Fold the body away: lines 2 and 3 collapse into line 1.
//! let folded = LineIndex::build("fn main() {\n    body();\n}\n", &[FoldRange::new(11, 25)]);
//! assert_eq!(folded.rendered_line_count(), 2);
//! assert_eq!(folded.line_at(15).number, 1);
//! ```

mod fold;
mod line_index;
mod types;

pub use fold::FoldRange;
pub use line_index::LineIndex;
pub use types::LineRecord;
