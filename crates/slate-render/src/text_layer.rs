#![forbid(unsafe_code)]

//! Pre-built text layers.
//!
//! The editor lays out its visible lines once per draw into a [`TextLayer`]
//! whose coordinates are relative to the layer origin, then hands the whole
//! layer to [`RenderSink::blit_layer`](crate::RenderSink::blit_layer).

use slate_core::geometry::Point;

use crate::color::PackedRgba;
use crate::font::FontRole;

/// One run of text in a single colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRun {
    /// Baseline origin, relative to the layer.
    pub origin: Point,
    pub text: String,
    pub role: FontRole,
    pub color: PackedRgba,
    /// Fill behind the run, if any.
    pub background: Option<PackedRgba>,
}

/// A transparent surface holding positioned glyph runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLayer {
    width: i32,
    height: i32,
    runs: Vec<GlyphRun>,
}

impl TextLayer {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            runs: Vec::new(),
        }
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Append a run. Runs are composed in insertion order.
    pub fn push_run(&mut self, run: GlyphRun) {
        self.runs.push(run);
    }

    /// Convenience for a run without background.
    pub fn push_text(&mut self, origin: Point, text: impl Into<String>, role: FontRole, color: PackedRgba) {
        self.push_run(GlyphRun {
            origin,
            text: text.into(),
            role,
            color,
            background: None,
        });
    }

    #[must_use]
    pub fn runs(&self) -> &[GlyphRun] {
        &self.runs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Drop every run but keep the allocation and size.
    pub fn clear(&mut self) {
        self.runs.clear();
    }
}
