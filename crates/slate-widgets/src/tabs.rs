#![forbid(unsafe_code)]

//! Tab container: a header strip of titles over one visible pane.
//!
//! Headers are packed left to right, each `title width + 2 * tab_x_padding`
//! wide and `main_font_size + 2 * tab_y_padding` tall. Every pane gets the
//! same body rect below the strip; only the current one is drawn and
//! receives mouse input. Hovering a header only highlights it; a click is
//! needed to switch.

use slate_core::geometry::{Point, Rect};
use slate_render::{DrawExt, FontRole, RenderSink};
use smallvec::SmallVec;

use crate::{Env, Route, Slot};

#[derive(Debug, Clone, Default)]
pub struct TabContainer {
    rect: Rect,
    tabs: Vec<(String, Slot)>,
    header_rects: Vec<Rect>,
    current: usize,
    hovered: Option<usize>,
    tab_height: i32,
}

impl TabContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tab.
    #[must_use]
    pub fn with_tab(mut self, title: impl Into<String>, slot: impl Into<Slot>) -> Self {
        self.tabs.push((title.into(), slot.into()));
        self
    }

    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Index of the visible tab.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Switch tabs programmatically. Out-of-range indices are ignored.
    pub fn set_current(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.current = index;
        }
    }

    /// Header under the pointer, if any.
    #[must_use]
    pub const fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn title(&self, index: usize) -> Option<&str> {
        self.tabs.get(index).map(|(title, _)| title.as_str())
    }

    #[must_use]
    pub fn header_rects(&self) -> &[Rect] {
        &self.header_rects
    }

    /// Slots in tab order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.tabs.iter().map(|(_, slot)| *slot)
    }

    /// Slot of the visible tab.
    #[must_use]
    pub fn current_slot(&self) -> Slot {
        self.tabs.get(self.current).map_or(Slot::Empty, |(_, slot)| *slot)
    }

    fn in_header_strip(&self, y: i32) -> bool {
        y >= self.rect.y && y < self.rect.y + self.tab_height
    }

    fn header_at(&self, x: i32, y: i32) -> Option<usize> {
        self.header_rects.iter().position(|r| r.contains(x, y))
    }

    /// Rect shared by every pane.
    #[must_use]
    pub fn body_rect(&self) -> Rect {
        self.rect.split_y(self.tab_height).1
    }

    pub(crate) fn set_rect(&mut self, rect: Rect, env: &Env<'_>) -> SmallVec<[(Slot, Rect); 4]> {
        let metrics = env.metrics();
        let (strip, _) = rect.split_y(metrics.tab_height());
        self.rect = rect;
        self.tab_height = strip.height;

        // Headers are clipped to the strip; ones past its right edge are empty.
        let mut x = rect.x;
        self.header_rects.clear();
        for (title, _) in &self.tabs {
            let width = env.fonts.text_width(FontRole::Main, title) + 2 * metrics.tab_x_padding;
            self.header_rects.push(Rect::new(x, strip.y, width, strip.height).intersection(&strip));
            x += width;
        }

        let body = self.body_rect();
        self.tabs.iter().map(|(_, slot)| (*slot, body)).collect()
    }

    pub(crate) fn mouse_over(&mut self, x: i32, y: i32) -> Route {
        if self.in_header_strip(y) {
            self.hovered = self.header_at(x, y);
            return Route::Consume;
        }
        Route::into_slot(self.current_slot())
    }

    pub(crate) fn mouse_down(&mut self, x: i32, y: i32) -> Route {
        if self.in_header_strip(y) {
            if let Some(index) = self.header_at(x, y) {
                if index != self.current {
                    slate_core::debug!(from = self.current, to = index, "tab switched");
                }
                self.current = index;
            }
            return Route::Consume;
        }
        Route::into_slot(self.current_slot())
    }

    pub(crate) fn mouse_up(&mut self, _x: i32, y: i32) -> Route {
        if self.in_header_strip(y) {
            return Route::Consume;
        }
        Route::into_slot(self.current_slot())
    }

    pub(crate) fn mouse_out(&mut self) {
        self.hovered = None;
    }

    /// Paint the header strip; the current pane is drawn by the tree.
    pub(crate) fn draw(&self, sink: &mut dyn RenderSink, env: &Env<'_>) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("widget_draw", widget = "Tabs", tabs = self.tabs.len()).entered();

        let palette = env.palette();
        let metrics = env.metrics();
        let ascent = env.fonts.line_metrics(FontRole::Main).ascent;

        for (i, ((title, _), header)) in self.tabs.iter().zip(&self.header_rects).enumerate() {
            if header.is_empty() {
                continue;
            }
            let fill = if self.hovered == Some(i) {
                palette.bg_strong
            } else {
                palette.bg_muted
            };
            sink.fill_rect(*header, fill);
            let origin = Point::new(
                header.x + metrics.tab_x_padding,
                header.y + metrics.tab_y_padding + ascent,
            );
            sink.draw_text(origin, title, FontRole::Main, palette.fg_strong);
            if i == self.current {
                sink.hline(*header, header.bottom() - 1, palette.fg_strong);
            }
        }
    }
}
