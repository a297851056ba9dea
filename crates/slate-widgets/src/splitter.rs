#![forbid(unsafe_code)]

//! Two-pane container with a draggable divider.
//!
//! # Geometry
//!
//! `split` is measured from the container origin along the axis. The first
//! child gets `[origin, origin + split)`, the second the rest. The grab band
//! is `[divider - half_width, divider + half_width]` (inclusive) and
//! overlaps the edges of both children.
//!
//! # Resizing
//!
//! The split is remembered as a ratio of the extent. The ratio is taken
//! from the configured pixel split at the first non-empty layout and again
//! after every drag; later resizes re-apply it, so a 400px splitter split
//! at 200 becomes split at 400 when widened to 800.
//!
//! # Drag state machine
//!
//! `idle -> dragging` on `mouse_down` inside the band; `dragging -> idle` on
//! any `mouse_up`. While dragging, every `mouse_over` moves the divider to
//! the pointer, clamped to stay `min_margin` away from both edges.

use slate_core::event::CursorShape;
use slate_core::geometry::Rect;
use slate_render::RenderSink;
use smallvec::{SmallVec, smallvec};

use crate::{Env, Route, Slot};

/// Which way the children are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Side by side; the divider moves along x.
    #[default]
    Horizontal,
    /// Stacked; the divider moves along y.
    Vertical,
}

/// When the divider is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    ShowAlways,
    /// Only while hovered or dragged.
    #[default]
    ShowOnHover,
}

#[derive(Debug, Clone)]
pub struct Splitter {
    rect: Rect,
    axis: Axis,
    split: i32,
    ratio: Option<f64>,
    first: Slot,
    second: Slot,
    dragging: bool,
    half_width: i32,
    border_mode: BorderMode,
    border_hovered: bool,
    min_margin: i32,
}

impl Splitter {
    /// A splitter with the divider at the container origin.
    #[must_use]
    pub fn new(axis: Axis, first: impl Into<Slot>, second: impl Into<Slot>) -> Self {
        Self {
            rect: Rect::default(),
            axis,
            split: 0,
            ratio: None,
            first: first.into(),
            second: second.into(),
            dragging: false,
            half_width: 2,
            border_mode: BorderMode::default(),
            border_hovered: false,
            min_margin: 5,
        }
    }

    /// Initial divider offset in pixels.
    #[must_use]
    pub fn with_split(mut self, px: i32) -> Self {
        self.split = px.max(0);
        self.ratio = None;
        self
    }

    #[must_use]
    pub fn with_border(mut self, half_width: i32, mode: BorderMode) -> Self {
        self.half_width = half_width.max(0);
        self.border_mode = mode;
        self
    }

    /// Closest the divider may be dragged to either edge.
    #[must_use]
    pub fn with_min_margin(mut self, px: i32) -> Self {
        self.min_margin = px.max(0);
        self
    }

    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Divider offset from the container origin.
    #[must_use]
    pub const fn split(&self) -> i32 {
        self.split
    }

    #[must_use]
    pub const fn ratio(&self) -> Option<f64> {
        self.ratio
    }

    #[must_use]
    pub const fn first(&self) -> Slot {
        self.first
    }

    #[must_use]
    pub const fn second(&self) -> Slot {
        self.second
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub const fn is_border_hovered(&self) -> bool {
        self.border_hovered
    }

    /// Pointer shape over the divider.
    #[must_use]
    pub const fn resize_shape(&self) -> CursorShape {
        match self.axis {
            Axis::Horizontal => CursorShape::EwResize,
            Axis::Vertical => CursorShape::NsResize,
        }
    }

    /// Rects of the first and second child.
    #[must_use]
    pub fn pane_rects(&self) -> (Rect, Rect) {
        match self.axis {
            Axis::Horizontal => self.rect.split_x(self.split),
            Axis::Vertical => self.rect.split_y(self.split),
        }
    }

    fn extent(&self) -> i32 {
        match self.axis {
            Axis::Horizontal => self.rect.width,
            Axis::Vertical => self.rect.height,
        }
    }

    fn origin(&self) -> i32 {
        match self.axis {
            Axis::Horizontal => self.rect.x,
            Axis::Vertical => self.rect.y,
        }
    }

    /// The coordinate that moves the divider.
    fn along(&self, x: i32, y: i32) -> i32 {
        match self.axis {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        }
    }

    /// Screen coordinate of the divider.
    fn divider(&self) -> i32 {
        self.origin() + self.split
    }

    fn remember_ratio(&mut self) {
        let extent = self.extent();
        if extent > 0 {
            self.ratio = Some(f64::from(self.split) / f64::from(extent));
        }
    }

    pub(crate) fn set_rect(&mut self, rect: Rect, _env: &Env<'_>) -> SmallVec<[(Slot, Rect); 4]> {
        self.rect = rect;
        let extent = self.extent();
        if extent > 0 {
            match self.ratio {
                Some(ratio) => self.split = (ratio * f64::from(extent)).round() as i32,
                None => {
                    self.split = self.split.min(extent);
                    self.remember_ratio();
                }
            }
            self.split = self.split.clamp(0, extent);
        }
        let (a, b) = self.pane_rects();
        smallvec![(self.first, a), (self.second, b)]
    }

    /// Move the divider to screen coordinate `pos`, keeping the margin.
    fn drag_to(&mut self, pos: i32) {
        let extent = self.extent();
        let lo = self.min_margin.min(extent / 2);
        let hi = (extent - self.min_margin).max(lo);
        self.split = (pos - self.origin()).clamp(lo, hi);
        self.remember_ratio();
    }

    /// Which side of the band `pos` is on.
    fn side(&self, pos: i32) -> Side {
        let div = self.divider();
        if pos < div - self.half_width {
            Side::First
        } else if pos > div + self.half_width {
            Side::Second
        } else {
            Side::Band
        }
    }

    pub(crate) fn mouse_over(&mut self, x: i32, y: i32) -> Route {
        let pos = self.along(x, y);
        if self.dragging {
            self.drag_to(pos);
            self.border_hovered = true;
            slate_core::trace!(split = self.split, "splitter drag");
            return Route::Consume;
        }
        match self.side(pos) {
            Side::First => {
                self.border_hovered = false;
                Route::into_slot(self.first)
            }
            Side::Second => {
                self.border_hovered = false;
                Route::into_slot(self.second)
            }
            Side::Band => {
                self.border_hovered = true;
                Route::Consume
            }
        }
    }

    pub(crate) fn mouse_down(&mut self, x: i32, y: i32) -> Route {
        match self.side(self.along(x, y)) {
            Side::Band => {
                self.dragging = true;
                slate_core::debug!(split = self.split, "splitter drag started");
                Route::Consume
            }
            Side::First if !self.first.is_empty() => Route::into_slot(self.first),
            Side::Second if !self.second.is_empty() => Route::into_slot(self.second),
            _ => Route::Consume,
        }
    }

    pub(crate) fn mouse_up(&mut self, x: i32, y: i32) -> Route {
        if self.dragging {
            self.dragging = false;
            slate_core::debug!(split = self.split, "splitter drag ended");
            return Route::Consume;
        }
        match self.side(self.along(x, y)) {
            Side::First if !self.first.is_empty() => Route::into_slot(self.first),
            Side::Second if !self.second.is_empty() => Route::into_slot(self.second),
            _ => Route::Consume,
        }
    }

    pub(crate) fn mouse_out(&mut self) {
        self.border_hovered = false;
    }

    /// Paint the divider; children are drawn by the tree first.
    pub(crate) fn draw(&self, sink: &mut dyn RenderSink, env: &Env<'_>) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("widget_draw", widget = "Splitter", split = self.split).entered();

        let visible = self.border_mode == BorderMode::ShowAlways || self.border_hovered || self.dragging;
        if !visible || self.rect.is_empty() {
            return;
        }
        let start = self.divider() - self.half_width;
        let thickness = self.half_width * 2;
        let band = match self.axis {
            Axis::Horizontal => Rect::new(start, self.rect.y, thickness, self.rect.height),
            Axis::Vertical => Rect::new(self.rect.x, start, self.rect.width, thickness),
        };
        sink.fill_rect(band, env.palette().fg_muted);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Band,
    Second,
}
