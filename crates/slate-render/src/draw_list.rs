#![forbid(unsafe_code)]

//! A [`RenderSink`] that records what it is asked to draw.
//!
//! Used for headless runs and for asserting on widget output in tests.

use slate_core::geometry::{Point, Rect};

use crate::color::PackedRgba;
use crate::font::FontRole;
use crate::sink::RenderSink;
use crate::text_layer::{GlyphRun, TextLayer};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: PackedRgba,
    },
    Line {
        from: Point,
        to: Point,
        color: PackedRgba,
    },
    Text {
        origin: Point,
        text: String,
        role: FontRole,
        color: PackedRgba,
    },
    Layer {
        offset: Point,
        runs: Vec<GlyphRun>,
    },
}

/// Recording sink.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Every piece of text drawn, directly or through a layer, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Text { text, .. } => out.push(text.as_str()),
                DrawCommand::Layer { runs, .. } => {
                    out.extend(runs.iter().map(|run| run.text.as_str()));
                }
                _ => {}
            }
        }
        out
    }

    /// Text runs from blitted layers, as `(text, colour)`.
    #[must_use]
    pub fn layer_runs(&self) -> Vec<(&str, PackedRgba)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Layer { runs, .. } => Some(runs),
                _ => None,
            })
            .flatten()
            .map(|run| (run.text.as_str(), run.color))
            .collect()
    }

    /// Rectangles filled with `color`.
    #[must_use]
    pub fn fills_with(&self, color: PackedRgba) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillRect { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Number of lines drawn in `color`.
    #[must_use]
    pub fn lines_with(&self, color: PackedRgba) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Line { color: c, .. } if *c == color))
            .count()
    }
}

impl RenderSink for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: PackedRgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: PackedRgba) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn draw_text(&mut self, origin: Point, text: &str, role: FontRole, color: PackedRgba) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_owned(),
            role,
            color,
        });
    }

    fn blit_layer(&mut self, layer: &TextLayer, offset: Point) {
        self.commands.push(DrawCommand::Layer {
            offset,
            runs: layer.runs().to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::DrawExt;

    #[test]
    fn records_in_call_order() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0, 0, 10, 10), PackedRgba::BLACK);
        list.draw_text(Point::new(2, 8), "File", FontRole::Menu, PackedRgba::WHITE);
        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::FillRect { .. }));
        assert_eq!(list.texts(), ["File"]);
    }

    #[test]
    fn layer_runs_are_flattened() {
        let mut layer = TextLayer::new(50, 20);
        layer.push_text(Point::new(0, 10), "a", FontRole::Code, PackedRgba::WHITE);
        layer.push_text(Point::new(6, 10), "b", FontRole::Code, PackedRgba::BLACK);
        let mut list = DrawList::new();
        list.blit_layer(&layer, Point::new(5, 5));
        assert_eq!(
            list.layer_runs(),
            vec![("a", PackedRgba::WHITE), ("b", PackedRgba::BLACK)]
        );
    }

    #[test]
    fn stroke_rect_draws_four_edges() {
        let mut list = DrawList::new();
        list.stroke_rect(Rect::new(0, 0, 10, 5), PackedRgba::WHITE);
        assert_eq!(list.lines_with(PackedRgba::WHITE), 4);

        list.clear();
        list.stroke_rect(Rect::new(0, 0, 0, 5), PackedRgba::WHITE);
        assert!(list.is_empty());
    }

    #[test]
    fn fills_with_filters_by_colour() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0, 0, 1, 1), PackedRgba::BLACK);
        list.fill_rect(Rect::new(1, 1, 1, 1), PackedRgba::WHITE);
        assert_eq!(list.fills_with(PackedRgba::WHITE), vec![Rect::new(1, 1, 1, 1)]);
    }
}
