#![forbid(unsafe_code)]

//! Solid colour leaf.

use slate_core::geometry::Rect;
use slate_render::{PackedRgba, RenderSink};

/// Fills its rectangle with one colour and swallows every mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPane {
    rect: Rect,
    color: PackedRgba,
}

impl ColorPane {
    #[must_use]
    pub const fn new(color: PackedRgba) -> Self {
        Self {
            rect: Rect::new(0, 0, 0, 0),
            color,
        }
    }

    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub const fn color(&self) -> PackedRgba {
        self.color
    }

    pub fn set_color(&mut self, color: PackedRgba) {
        self.color = color;
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub(crate) fn draw(&self, sink: &mut dyn RenderSink) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("widget_draw", widget = "ColorPane").entered();

        if !self.rect.is_empty() {
            sink.fill_rect(self.rect, self.color);
        }
    }
}
