#![forbid(unsafe_code)]

//! The drawing surface widgets render into.

use slate_core::geometry::{Point, Rect};

use crate::color::PackedRgba;
use crate::font::FontRole;
use crate::text_layer::TextLayer;

/// A backend that can draw the handful of primitives the shell needs.
///
/// Coordinates are screen pixels. Implementations decide clipping and
/// anti-aliasing; callers never read anything back.
pub trait RenderSink {
    /// Fill `rect` with a solid colour.
    fn fill_rect(&mut self, rect: Rect, color: PackedRgba);

    /// Draw a one pixel line from `from` to `to`.
    fn draw_line(&mut self, from: Point, to: Point, color: PackedRgba);

    /// Draw a glyph run whose baseline starts at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str, role: FontRole, color: PackedRgba);

    /// Compose a pre-built layer with its top-left corner at `offset`.
    fn blit_layer(&mut self, layer: &TextLayer, offset: Point);
}

/// Helpers built on [`RenderSink`] primitives.
pub trait DrawExt: RenderSink {
    /// Outline `rect` with one pixel lines along its edges.
    fn stroke_rect(&mut self, rect: Rect, color: PackedRgba) {
        if rect.is_empty() {
            return;
        }
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;
        self.draw_line(rect.min(), Point::new(right, rect.y), color);
        self.draw_line(Point::new(rect.x, bottom), Point::new(right, bottom), color);
        self.draw_line(rect.min(), Point::new(rect.x, bottom), color);
        self.draw_line(Point::new(right, rect.y), Point::new(right, bottom), color);
    }

    /// Draw a horizontal line across `rect` at row `y`.
    fn hline(&mut self, rect: Rect, y: i32, color: PackedRgba) {
        self.draw_line(Point::new(rect.x, y), Point::new(rect.right(), y), color);
    }
}

impl<T: RenderSink + ?Sized> DrawExt for T {}
