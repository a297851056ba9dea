#![forbid(unsafe_code)]

//! Text model and syntax highlighting.
//!
//! - [`buffer`]: the line buffer and its cursor-relative edit operations.
//! - [`blink`]: cursor blink phase as a pure function of ticks.
//! - [`highlight`]: rule-based colouring of single lines.
//! - [`nanorc`]: parser for nanorc-style highlighter definitions.

pub mod blink;
pub mod buffer;
pub mod highlight;
pub mod nanorc;

pub use blink::cursor_visible;
pub use buffer::{Cursor, TextBuffer};
pub use highlight::{
    HighlightRule, HighlightSpan, Highlighter, HighlighterRegistry, highlight_line,
};
pub use nanorc::{HighlighterError, parse_nanorc};
