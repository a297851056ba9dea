#![forbid(unsafe_code)]

//! The widget arena.
//!
//! Widgets are stored by value in a `Vec` and addressed by [`WidgetId`].
//! Containers name their children through [`Slot`]s; the tree follows
//! those slots for layout, drawing, and mouse routing, so no widget ever
//! holds a reference to another.
//!
//! Mouse routing walks from the root: each widget either consumes the
//! event, delegates it to one child, or misses. The walk is bounded by
//! the arena size, so a malformed tree cannot loop forever; [`validate`]
//! reports such trees up front.
//!
//! A splitter that starts a drag captures the pointer: until the next
//! `mouse_up`, hover and release go straight to it, wherever the pointer is
//! and whatever its ancestors would have done with the point.
//!
//! [`validate`]: WidgetTree::validate

use std::fmt;

use slate_core::Tick;
use slate_core::event::CursorShape;
use slate_core::geometry::Rect;
use slate_core::input::FrameInput;
use slate_render::RenderSink;
use smallvec::SmallVec;

use crate::{ColorPane, Env, MenuBar, Route, Slot, Splitter, TabContainer, TextEditor, Widget, WidgetId};

/// Structural problems found by [`WidgetTree::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A slot or root names an id that is not in the arena.
    UnknownWidget(WidgetId),
    /// A widget is reachable through more than one slot, or from itself.
    SharedWidget(WidgetId),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWidget(id) => write!(f, "widget #{} does not exist", id.index()),
            Self::SharedWidget(id) => {
                write!(f, "widget #{} is reachable through more than one slot", id.index())
            }
        }
    }
}

impl std::error::Error for TreeError {}

#[derive(Debug, Clone, Default)]
pub struct WidgetTree {
    nodes: Vec<Widget>,
    cursor_shape: CursorShape,
    capture: Option<WidgetId>,
}

impl WidgetTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a widget and return its handle.
    pub fn add(&mut self, widget: impl Into<Widget>) -> WidgetId {
        let id = WidgetId(self.nodes.len());
        self.nodes.push(widget.into());
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.nodes.get_mut(id.0)
    }

    #[must_use]
    pub fn editor(&self, id: WidgetId) -> Option<&TextEditor> {
        match self.get(id) {
            Some(Widget::Editor(e)) => Some(e),
            _ => None,
        }
    }

    pub fn editor_mut(&mut self, id: WidgetId) -> Option<&mut TextEditor> {
        match self.get_mut(id) {
            Some(Widget::Editor(e)) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn splitter(&self, id: WidgetId) -> Option<&Splitter> {
        match self.get(id) {
            Some(Widget::Splitter(s)) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn tabs(&self, id: WidgetId) -> Option<&TabContainer> {
        match self.get(id) {
            Some(Widget::Tabs(t)) => Some(t),
            _ => None,
        }
    }

    #[must_use]
    pub fn menu_bar(&self, id: WidgetId) -> Option<&MenuBar> {
        match self.get(id) {
            Some(Widget::MenuBar(m)) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn color_pane(&self, id: WidgetId) -> Option<&ColorPane> {
        match self.get(id) {
            Some(Widget::ColorPane(p)) => Some(p),
            _ => None,
        }
    }

    /// Pointer shape requested by the last `mouse_over` consumer.
    #[must_use]
    pub const fn cursor_shape(&self) -> CursorShape {
        self.cursor_shape
    }

    /// Widget holding the pointer capture, if a drag is in progress.
    #[must_use]
    pub const fn pointer_capture(&self) -> Option<WidgetId> {
        self.capture
    }

    /// Check that every slot reachable from `root` names a distinct,
    /// existing widget.
    pub fn validate(&self, root: WidgetId) -> Result<(), TreeError> {
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let widget = self.get(id).ok_or(TreeError::UnknownWidget(id))?;
            if std::mem::replace(&mut seen[id.0], true) {
                return Err(TreeError::SharedWidget(id));
            }
            stack.extend(widget.children().into_iter().filter_map(Slot::widget));
        }
        Ok(())
    }

    /// Assign `rect` to `id` and lay out everything below it.
    pub fn set_rect(&mut self, id: WidgetId, rect: Rect, env: &Env<'_>) {
        let children: SmallVec<[(Slot, Rect); 4]> = match self.nodes.get_mut(id.0) {
            None => return,
            Some(Widget::Splitter(s)) => s.set_rect(rect, env),
            Some(Widget::Tabs(t)) => t.set_rect(rect, env),
            Some(Widget::MenuBar(m)) => m.set_rect(rect, env),
            Some(Widget::Editor(e)) => {
                e.set_rect(rect);
                SmallVec::new()
            }
            Some(Widget::ColorPane(p)) => {
                p.set_rect(rect);
                SmallVec::new()
            }
        };
        for (slot, child_rect) in children {
            if let Some(child) = slot.widget() {
                self.set_rect(child, child_rect, env);
            }
        }
    }

    /// Paint `root` and its visible descendants.
    pub fn draw(&self, root: WidgetId, sink: &mut dyn RenderSink, env: &Env<'_>, tick: Tick) {
        let Some(widget) = self.get(root) else {
            return;
        };
        match widget {
            Widget::Splitter(s) => {
                self.draw_slot(s.first(), sink, env, tick);
                self.draw_slot(s.second(), sink, env, tick);
                s.draw(sink, env);
            }
            Widget::Tabs(t) => {
                t.draw(sink, env);
                self.draw_slot(t.current_slot(), sink, env, tick);
            }
            Widget::MenuBar(m) => {
                self.draw_slot(m.body(), sink, env, tick);
                m.draw(sink, env);
            }
            Widget::Editor(e) => e.draw(sink, env, tick),
            Widget::ColorPane(p) => p.draw(sink),
        }
    }

    fn draw_slot(&self, slot: Slot, sink: &mut dyn RenderSink, env: &Env<'_>, tick: Tick) {
        if let Some(id) = slot.widget() {
            self.draw(id, sink, env, tick);
        }
    }

    /// Follow routes from `root` until a widget consumes or nobody does.
    fn dispatch(&mut self, root: WidgetId, mut step: impl FnMut(&mut Widget) -> Route) -> Option<WidgetId> {
        let mut id = root;
        for _ in 0..=self.nodes.len() {
            match step(self.nodes.get_mut(id.0)?) {
                Route::Consume => return Some(id),
                Route::Delegate(child) => id = child,
                Route::Miss => return None,
            }
        }
        slate_core::warn!(root = root.0, "mouse routing did not terminate");
        None
    }

    /// Hover hit test; returns the consumer and updates the cursor shape.
    ///
    /// A splitter being dragged moves its divider here and lays out its
    /// children again.
    pub fn mouse_over(&mut self, root: WidgetId, x: i32, y: i32, env: &Env<'_>) -> Option<WidgetId> {
        let step = |widget: &mut Widget| match widget {
            Widget::Splitter(s) => s.mouse_over(x, y),
            Widget::Tabs(t) => t.mouse_over(x, y),
            Widget::MenuBar(m) => m.mouse_over(x, y, env),
            Widget::Editor(e) => e.mouse_over(),
            Widget::ColorPane(_) => Route::Miss,
        };
        let consumer = match self.captured() {
            Some(holder) => self.dispatch(holder, step),
            None => self.dispatch(root, step),
        };

        if let Some(id) = consumer
            && let Some(splitter) = self.splitter(id)
            && splitter.is_dragging()
        {
            let rect = splitter.rect();
            self.set_rect(id, rect, env);
        }

        self.cursor_shape = consumer
            .and_then(|id| self.get(id))
            .map_or(CursorShape::Default, Widget::hover_shape);
        consumer
    }

    /// Press hit test; the consumer is the keyboard focus candidate.
    ///
    /// A splitter that starts a drag here takes the pointer capture.
    pub fn mouse_down(&mut self, root: WidgetId, x: i32, y: i32, env: &Env<'_>) -> Option<WidgetId> {
        let consumer = self.dispatch(root, |widget| match widget {
            Widget::Splitter(s) => s.mouse_down(x, y),
            Widget::Tabs(t) => t.mouse_down(x, y),
            Widget::MenuBar(m) => m.mouse_down(x, y, env),
            Widget::Editor(e) => e.mouse_down(),
            Widget::ColorPane(_) => Route::Miss,
        });
        if let Some(id) = consumer
            && self.splitter(id).is_some_and(Splitter::is_dragging)
        {
            slate_core::debug!(widget = id.0, "pointer captured");
            self.capture = Some(id);
        }
        consumer
    }

    /// Release hit test. Releases the pointer capture, if any.
    pub fn mouse_up(&mut self, root: WidgetId, x: i32, y: i32) -> Option<WidgetId> {
        let start = self.captured().unwrap_or(root);
        self.capture = None;
        self.dispatch(start, |widget| match widget {
            Widget::Splitter(s) => s.mouse_up(x, y),
            Widget::Tabs(t) => t.mouse_up(x, y),
            Widget::MenuBar(m) => m.mouse_up(x, y),
            Widget::Editor(e) => e.mouse_up(),
            Widget::ColorPane(_) => Route::Miss,
        })
    }

    /// The capture holder, dropped if it is no longer dragging.
    fn captured(&mut self) -> Option<WidgetId> {
        let holder = self.capture?;
        if self.splitter(holder).is_some_and(Splitter::is_dragging) {
            Some(holder)
        } else {
            self.capture = None;
            None
        }
    }

    /// Tell `id` it is no longer the hover consumer.
    pub fn mouse_out(&mut self, id: WidgetId) {
        match self.get_mut(id) {
            Some(Widget::Splitter(s)) => s.mouse_out(),
            Some(Widget::Tabs(t)) => t.mouse_out(),
            Some(Widget::MenuBar(m)) => m.mouse_out(),
            Some(Widget::Editor(_) | Widget::ColorPane(_)) | None => {}
        }
    }

    /// Deliver one frame of keyboard input to the focus holder `id`.
    pub fn take_keyboard(&mut self, id: WidgetId, input: &FrameInput, env: &Env<'_>, tick: Tick) {
        match self.get_mut(id) {
            Some(Widget::Editor(e)) => e.take_keyboard(input, env, tick),
            Some(other) => {
                slate_core::trace!(widget = other.kind(), "keyboard input not handled");
            }
            None => {}
        }
    }

    /// Tell `id` it is no longer the keyboard focus holder.
    pub fn keyboard_focus_lost(&mut self, id: WidgetId) {
        if let Some(Widget::Editor(e)) = self.get_mut(id) {
            e.keyboard_focus_lost();
        }
    }

    /// Drain menu activations from every menu bar, in arena order.
    pub fn take_activated(&mut self) -> Vec<String> {
        self.nodes
            .iter_mut()
            .filter_map(|widget| match widget {
                Widget::MenuBar(m) => m.take_activated(),
                _ => None,
            })
            .collect()
    }
}
