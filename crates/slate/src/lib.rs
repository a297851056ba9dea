#![forbid(unsafe_code)]

//! slate public facade crate.
//!
//! Re-exports the types a host needs to build and drive a shell, plus a
//! prelude and a top-level [`Error`] that wraps every startup failure.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use slate_core::Tick;
pub use slate_core::event::{CursorShape, KeyCode, Modifiers, MouseButton};
pub use slate_core::geometry::{Point, Rect, Sides};
pub use slate_core::input::{FrameInput, HeldKey, KeyTracker, RepeatPolicy};
pub use slate_core::keybinding::{KeyShortcut, ShortcutMap};

// --- Render re-exports -----------------------------------------------------

pub use slate_render::{
    DrawCommand, DrawExt, DrawList, FontMetrics, FontRole, LineMetrics, MonoFace,
    MonospaceMetrics, PackedRgba, RenderSink, TextLayer,
};

// --- Style re-exports ------------------------------------------------------

pub use slate_style::{LayoutMetrics, Palette, Theme, ThemeBuilder};

// --- Text re-exports -------------------------------------------------------

pub use slate_text::{
    Cursor, HighlightRule, Highlighter, HighlighterError, HighlighterRegistry, TextBuffer,
    parse_nanorc,
};

// --- Widget re-exports -----------------------------------------------------

pub use slate_widgets::{
    Axis, BorderMode, ColorPane, Env, MenuBar, MenuItem, Slot, Splitter, TabContainer,
    TextEditor, TreeError, Widget, WidgetId, WidgetTree,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use slate_runtime::{
    DefaultLayout, EventRouter, FrameReport, Shell, ShellConfig, ShellError, StatusTicker,
    TextPoster, default_layout,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for slate hosts.
#[derive(Debug)]
pub enum Error {
    /// A highlighter definition could not be parsed.
    Highlighter(HighlighterError),
    /// A widget tree is malformed.
    Tree(TreeError),
    /// The shell refused to start.
    #[cfg(feature = "runtime")]
    Shell(ShellError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Highlighter(err) => write!(f, "{err}"),
            Self::Tree(err) => write!(f, "{err}"),
            #[cfg(feature = "runtime")]
            Self::Shell(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Highlighter(err) => Some(err),
            Self::Tree(err) => Some(err),
            #[cfg(feature = "runtime")]
            Self::Shell(err) => Some(err),
        }
    }
}

impl From<HighlighterError> for Error {
    fn from(err: HighlighterError) -> Self {
        Self::Highlighter(err)
    }
}

impl From<TreeError> for Error {
    fn from(err: TreeError) -> Self {
        Self::Tree(err)
    }
}

#[cfg(feature = "runtime")]
impl From<ShellError> for Error {
    fn from(err: ShellError) -> Self {
        Self::Shell(err)
    }
}

/// Standard result type for slate APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Env, Error, FontRole, FrameInput, KeyCode, Modifiers, MonospaceMetrics, PackedRgba,
        Rect, RenderSink, Result, Slot, Theme, WidgetId, WidgetTree,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{Shell, ShellConfig, default_layout};

    pub use crate::{core, render, style, text, widgets};

    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use slate_core as core;
pub use slate_render as render;
#[cfg(feature = "runtime")]
pub use slate_runtime as runtime;
pub use slate_style as style;
pub use slate_text as text;
pub use slate_widgets as widgets;
