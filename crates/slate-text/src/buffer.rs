#![forbid(unsafe_code)]

//! Line buffer with a single cursor.
//!
//! [`TextBuffer`] stores a document as a list of lines without line breaks
//! and exposes the editing operations a plain text editor needs. Columns
//! count chars (Unicode scalar values); byte offsets are derived on demand.
//!
//! Every operation is total: at a document boundary it is a no-op rather
//! than an error, the cursor never points outside the document, and the
//! buffer always holds at least one (possibly empty) line.
//!
//! # Example
//! ```
//! use slate_text::buffer::{Cursor, TextBuffer};
//!
//! let mut buf = TextBuffer::new();
//! buf.insert_text("hello");
//! buf.newline();
//! buf.insert_text("world");
//! assert_eq!(buf.text(), "hello\nworld");
//!
//! buf.backspace();
//! buf.move_to_line_start();
//! buf.backspace(); // joins the lines
//! assert_eq!(buf.text(), "helloworl");
//! assert_eq!(buf.cursor(), Cursor::new(0, 5));
//! ```
//!
//! # Interaction clock
//!
//! The buffer has no notion of time. The owner feeds it the current frame
//! tick via [`TextBuffer::set_tick`]; cursor-moving and text-mutating calls
//! stamp that tick as the last interaction, which drives cursor blink.

use slate_core::Tick;

use crate::blink::cursor_visible;

/// Spaces inserted by [`TextBuffer::insert_tab`].
pub const TAB: &str = "    ";

/// Cursor position in char units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cursor {
    /// 0-based line index.
    pub row: usize,
    /// 0-based char offset within the line.
    pub col: usize,
}

impl Cursor {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An editable document of lines.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: Cursor,
    clock: Tick,
    last_interaction: Tick,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    /// One empty line, cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Cursor::default(),
            clock: 0,
            last_interaction: 0,
        }
    }

    /// Buffer holding `text`, cursor at the origin.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut buf = Self::new();
        buf.set_text(text);
        buf
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// Whole document, lines joined with `'\n'`.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Number of lines; never zero.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length of line `row` in chars, 0 past the end.
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, |line| line.chars().count())
    }

    /// Chars in the document, counting one per line break.
    #[must_use]
    pub fn char_count(&self) -> usize {
        let chars: usize = self.lines.iter().map(|l| l.chars().count()).sum();
        chars + self.lines.len() - 1
    }

    /// A single empty line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Cursor with its column clamped to the current line.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        Cursor::new(
            self.cursor.row,
            self.cursor.col.min(self.line_len(self.cursor.row)),
        )
    }

    /// Move the cursor, clamping it into the document.
    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.touch();
        let row = cursor.row.min(self.lines.len() - 1);
        self.cursor = Cursor::new(row, cursor.col.min(self.line_len(row)));
    }

    // ---------------------------------------------------------------------
    // Clock
    // ---------------------------------------------------------------------

    /// Supply the current frame tick.
    pub fn set_tick(&mut self, now: Tick) {
        self.clock = now;
    }

    #[must_use]
    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// Tick of the last cursor-moving or text-mutating call.
    #[must_use]
    pub fn last_interaction(&self) -> Tick {
        self.last_interaction
    }

    /// Blink phase at the current clock for a half-period of `period` ticks.
    #[must_use]
    pub fn cursor_visible(&self, period: Tick) -> bool {
        cursor_visible(self.clock, self.last_interaction, period)
    }

    fn touch(&mut self) {
        self.last_interaction = self.clock;
    }

    // ---------------------------------------------------------------------
    // Editing
    // ---------------------------------------------------------------------

    /// Insert `text` at the cursor and move past it.
    ///
    /// Line breaks (`"\n"` or `"\r\n"`) inside `text` split the line as
    /// [`newline`](Self::newline) would.
    pub fn insert_text(&mut self, text: &str) {
        self.touch();
        self.clamp_col();
        for (i, segment) in split_lines(text).enumerate() {
            if i > 0 {
                self.split_line();
            }
            if segment.is_empty() {
                continue;
            }
            let line = &mut self.lines[self.cursor.row];
            let at = byte_index(line, self.cursor.col);
            line.insert_str(at, segment);
            self.cursor.col += segment.chars().count();
        }
    }

    /// Insert four spaces.
    pub fn insert_tab(&mut self) {
        self.insert_text(TAB);
    }

    /// Split the current line at the cursor.
    pub fn newline(&mut self) {
        self.touch();
        self.clamp_col();
        self.split_line();
    }

    /// Delete the char before the cursor, joining lines at column 0.
    pub fn backspace(&mut self) {
        self.touch();
        self.clamp_col();
        let Cursor { row, col } = self.cursor;
        if col == 0 {
            if row == 0 {
                return;
            }
            let removed = self.lines.remove(row);
            let prev = &mut self.lines[row - 1];
            let prev_len = prev.chars().count();
            prev.push_str(&removed);
            self.cursor = Cursor::new(row - 1, prev_len);
            return;
        }
        let line = &mut self.lines[row];
        let start = byte_index(line, col - 1);
        let end = byte_index(line, col);
        line.replace_range(start..end, "");
        self.cursor.col = col - 1;
    }

    // ---------------------------------------------------------------------
    // Cursor motion
    // ---------------------------------------------------------------------

    /// One char left, wrapping to the end of the previous line.
    pub fn cursor_left(&mut self) {
        self.touch();
        self.clamp_col();
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = self.line_len(self.cursor.row);
        }
    }

    /// One char right, wrapping to the start of the next line.
    pub fn cursor_right(&mut self) {
        self.touch();
        self.clamp_col();
        if self.cursor.col < self.line_len(self.cursor.row) {
            self.cursor.col += 1;
        } else if self.cursor.row + 1 < self.lines.len() {
            self.cursor = Cursor::new(self.cursor.row + 1, 0);
        }
    }

    /// One line up. On the first line, snaps to column 0.
    pub fn cursor_up(&mut self) {
        self.touch();
        if self.cursor.row == 0 {
            self.cursor.col = 0;
            return;
        }
        self.cursor.row -= 1;
        self.clamp_col();
    }

    /// One line down. On the last line, snaps to the end of the line.
    pub fn cursor_down(&mut self) {
        self.touch();
        if self.cursor.row + 1 >= self.lines.len() {
            self.cursor.col = self.line_len(self.cursor.row);
            return;
        }
        self.cursor.row += 1;
        self.clamp_col();
    }

    pub fn move_to_line_start(&mut self) {
        self.touch();
        self.cursor.col = 0;
    }

    pub fn move_to_line_end(&mut self) {
        self.touch();
        self.cursor.col = self.line_len(self.cursor.row);
    }

    /// Selections are not supported; logs and keeps the cursor alive.
    pub fn select_all(&mut self) {
        tracing::warn!("select all is not implemented");
        self.touch();
    }

    // ---------------------------------------------------------------------
    // Bulk replacement
    // ---------------------------------------------------------------------

    /// Replace the whole document.
    ///
    /// The cursor keeps its position where it still exists and is clamped
    /// otherwise. This is not an interaction and does not restart the
    /// blink.
    pub fn set_text(&mut self, text: &str) {
        self.lines = split_lines(text).map(str::to_owned).collect();
        let row = self.cursor.row.min(self.lines.len() - 1);
        self.cursor = Cursor::new(row, self.cursor.col.min(self.line_len(row)));
    }

    fn clamp_col(&mut self) {
        self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.row));
    }

    /// Split at the (already clamped) cursor and move to the new line.
    fn split_line(&mut self) {
        let Cursor { row, col } = self.cursor;
        let line = &mut self.lines[row];
        let at = byte_index(line, col);
        let tail = line.split_off(at);
        self.lines.insert(row + 1, tail);
        self.cursor = Cursor::new(row + 1, 0);
    }
}

/// Split on `'\n'`, dropping the `'\r'` of a `"\r\n"` pair.
///
/// Always yields at least one item; a trailing break yields a final empty
/// line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut parts = text.split('\n').peekable();
    std::iter::from_fn(move || {
        let part = parts.next()?;
        if parts.peek().is_some() {
            Some(part.strip_suffix('\r').unwrap_or(part))
        } else {
            Some(part)
        }
    })
}

/// Byte offset of char `col` in `line`, or the line length past the end.
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
}
