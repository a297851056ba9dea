#![forbid(unsafe_code)]

//! Font roles and metrics.
//!
//! Loading font files is a backend concern. Widgets only ever ask a
//! [`FontMetrics`] provider how wide a string is and how tall a line is for
//! one of three [`FontRole`]s.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Which face a piece of text is set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    /// Tab titles and general UI text.
    Main,
    /// Menu bar headers and dropdown entries.
    Menu,
    /// Editor contents.
    Code,
}

impl FontRole {
    pub const ALL: [FontRole; 3] = [FontRole::Main, FontRole::Menu, FontRole::Code];
}

/// Vertical metrics of one line of text, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineMetrics {
    /// Baseline-to-baseline distance.
    pub height: i32,
    /// Distance from the top of the line to the baseline.
    pub ascent: i32,
    /// Distance from the baseline to the bottom of the line.
    pub descent: i32,
}

impl LineMetrics {
    /// Metrics are usable when lines have positive height.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.height <= 0 || self.ascent < 0 || self.descent < 0
    }
}

/// Measures text for layout and drawing.
pub trait FontMetrics {
    /// Line metrics for `role`.
    fn line_metrics(&self, role: FontRole) -> LineMetrics;

    /// Advance width of `text` set on one line.
    fn text_width(&self, role: FontRole, text: &str) -> i32;

    /// Advance width of a single character.
    fn advance(&self, role: FontRole, ch: char) -> i32 {
        let mut buf = [0u8; 4];
        self.text_width(role, ch.encode_utf8(&mut buf))
    }

    /// Width of the first `chars` characters of `text`.
    fn prefix_width(&self, role: FontRole, text: &str, chars: usize) -> i32 {
        let end = text
            .char_indices()
            .nth(chars)
            .map_or(text.len(), |(byte, _)| byte);
        self.text_width(role, &text[..end])
    }
}

/// Per-role parameters of [`MonospaceMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonoFace {
    /// Width of one terminal-style cell.
    pub cell_width: i32,
    pub line: LineMetrics,
}

impl MonoFace {
    /// Derive a face from a pixel size with typical monospace proportions.
    #[must_use]
    pub const fn from_size(size: i32) -> Self {
        let ascent = size * 4 / 5;
        Self {
            cell_width: size * 3 / 5,
            line: LineMetrics {
                height: size,
                ascent,
                descent: size - ascent,
            },
        }
    }
}

/// Deterministic metrics: every grapheme is one or two cells wide.
///
/// Wide characters (CJK, most emoji) take two cells, as reported by
/// `unicode-width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMetrics {
    main: MonoFace,
    menu: MonoFace,
    code: MonoFace,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::from_sizes(18, 14, 14)
    }
}

impl MonospaceMetrics {
    /// Build from the pixel sizes of the main, menu, and code faces.
    #[must_use]
    pub const fn from_sizes(main: i32, menu: i32, code: i32) -> Self {
        Self {
            main: MonoFace::from_size(main),
            menu: MonoFace::from_size(menu),
            code: MonoFace::from_size(code),
        }
    }

    /// Replace the face used for `role`.
    #[must_use]
    pub fn with_face(mut self, role: FontRole, face: MonoFace) -> Self {
        *self.face_mut(role) = face;
        self
    }

    #[must_use]
    pub fn face(&self, role: FontRole) -> &MonoFace {
        match role {
            FontRole::Main => &self.main,
            FontRole::Menu => &self.menu,
            FontRole::Code => &self.code,
        }
    }

    fn face_mut(&mut self, role: FontRole) -> &mut MonoFace {
        match role {
            FontRole::Main => &mut self.main,
            FontRole::Menu => &mut self.menu,
            FontRole::Code => &mut self.code,
        }
    }
}

impl FontMetrics for MonospaceMetrics {
    fn line_metrics(&self, role: FontRole) -> LineMetrics {
        self.face(role).line
    }

    fn text_width(&self, role: FontRole, text: &str) -> i32 {
        let cells: usize = text.graphemes(true).map(UnicodeWidthStr::width).sum();
        i32::try_from(cells)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.face(role).cell_width)
    }
}
