#![forbid(unsafe_code)]

//! Widgets for the slate shell.
//!
//! Widgets live in a [`WidgetTree`] arena and refer to their children by
//! [`WidgetId`]. The set of widget kinds is closed ([`Widget`]); the tree
//! dispatches every call with a `match` and performs the recursion into
//! children itself, so containers never hold references to each other.
//!
//! Every widget supports the same contract:
//!
//! | call | effect |
//! |------|--------|
//! | `set_rect` | assign geometry; containers lay out their children |
//! | `draw` | paint into a [`RenderSink`](slate_render::RenderSink); never changes layout |
//! | `mouse_over` | hover hit test, returns the consuming widget |
//! | `mouse_down` / `mouse_up` | click hit test; the `mouse_down` consumer is the focus candidate |
//! | `mouse_out` | the widget stopped being the hover consumer |
//! | `take_keyboard` | deliver one frame of keyboard input to the focus holder |
//! | `keyboard_focus_lost` | the widget stopped being the focus holder |

pub mod color_pane;
pub mod editor;
pub mod menu;
pub mod splitter;
pub mod tabs;
pub mod tree;

pub use color_pane::ColorPane;
pub use editor::{EditorAction, TextEditor, keymap};
pub use menu::{MenuBar, MenuItem};
pub use splitter::{Axis, BorderMode, Splitter};
pub use tabs::TabContainer;
pub use tree::{TreeError, WidgetTree};

use slate_core::event::CursorShape;
use slate_core::geometry::Rect;
use slate_core::input::RepeatPolicy;
use slate_render::FontMetrics;
use slate_style::{LayoutMetrics, Palette, Theme};

/// Handle to a widget in a [`WidgetTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(usize);

impl WidgetId {
    /// Position of the widget in its arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A child position in a container: a widget, or explicitly nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slot {
    #[default]
    Empty,
    Widget(WidgetId),
}

impl Slot {
    #[must_use]
    pub const fn widget(self) -> Option<WidgetId> {
        match self {
            Self::Empty => None,
            Self::Widget(id) => Some(id),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<WidgetId> for Slot {
    fn from(id: WidgetId) -> Self {
        Self::Widget(id)
    }
}

impl From<Option<WidgetId>> for Slot {
    fn from(id: Option<WidgetId>) -> Self {
        id.map_or(Self::Empty, Self::Widget)
    }
}

/// Shared, read-only context for layout, drawing, and input.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    pub fonts: &'a dyn FontMetrics,
    pub theme: &'a Theme,
    pub repeat: RepeatPolicy,
}

impl<'a> Env<'a> {
    #[must_use]
    pub fn new(fonts: &'a dyn FontMetrics, theme: &'a Theme) -> Self {
        Self {
            fonts,
            theme,
            repeat: RepeatPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_repeat(mut self, repeat: RepeatPolicy) -> Self {
        self.repeat = repeat;
        self
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.theme.palette
    }

    #[must_use]
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.theme.metrics
    }
}

/// Where a mouse event goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route {
    /// The widget itself consumes the event.
    Consume,
    /// Forward to a child.
    Delegate(WidgetId),
    /// Nobody consumes it.
    Miss,
}

impl Route {
    /// Forward into `slot`, or miss when it is empty.
    pub(crate) fn into_slot(slot: Slot) -> Self {
        slot.widget().map_or(Self::Miss, Self::Delegate)
    }
}

/// The closed set of widget kinds.
#[derive(Debug, Clone)]
pub enum Widget {
    Splitter(Splitter),
    Tabs(TabContainer),
    MenuBar(MenuBar),
    Editor(TextEditor),
    ColorPane(ColorPane),
}

impl Widget {
    /// Short name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Splitter(_) => "Splitter",
            Self::Tabs(_) => "Tabs",
            Self::MenuBar(_) => "MenuBar",
            Self::Editor(_) => "TextEditor",
            Self::ColorPane(_) => "ColorPane",
        }
    }

    /// Rectangle last assigned by `set_rect`.
    #[must_use]
    pub fn rect(&self) -> Rect {
        match self {
            Self::Splitter(w) => w.rect(),
            Self::Tabs(w) => w.rect(),
            Self::MenuBar(w) => w.rect(),
            Self::Editor(w) => w.rect(),
            Self::ColorPane(w) => w.rect(),
        }
    }

    /// Pointer shape while this widget is the hover consumer.
    #[must_use]
    pub fn hover_shape(&self) -> CursorShape {
        match self {
            Self::Splitter(s) => s.resize_shape(),
            Self::Editor(_) => CursorShape::Text,
            Self::Tabs(_) | Self::MenuBar(_) | Self::ColorPane(_) => CursorShape::Default,
        }
    }

    /// Child slots in draw order.
    #[must_use]
    pub fn children(&self) -> Vec<Slot> {
        match self {
            Self::Splitter(s) => vec![s.first(), s.second()],
            Self::Tabs(t) => t.slots().collect(),
            Self::MenuBar(m) => vec![m.body()],
            Self::Editor(_) | Self::ColorPane(_) => Vec::new(),
        }
    }
}

impl From<Splitter> for Widget {
    fn from(w: Splitter) -> Self {
        Self::Splitter(w)
    }
}

impl From<TabContainer> for Widget {
    fn from(w: TabContainer) -> Self {
        Self::Tabs(w)
    }
}

impl From<MenuBar> for Widget {
    fn from(w: MenuBar) -> Self {
        Self::MenuBar(w)
    }
}

impl From<TextEditor> for Widget {
    fn from(w: TextEditor) -> Self {
        Self::Editor(w)
    }
}

impl From<ColorPane> for Widget {
    fn from(w: ColorPane) -> Self {
        Self::ColorPane(w)
    }
}
