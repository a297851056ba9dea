#![forbid(unsafe_code)]

//! The frame loop.
//!
//! A [`Shell`] owns the widget tree and everything needed to run it: the
//! theme, font metrics, key repeat policy, the event router, and the
//! receiving side of the text mailbox. The host calls [`Shell::update`]
//! once per frame with that frame's input, then [`Shell::draw`].
//!
//! `update` advances the tick, applies text posted since the last frame,
//! and routes input. Nothing blocks, and widgets only ever see the frame
//! thread.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use slate_core::Tick;
use slate_core::geometry::Rect;
use slate_core::input::{FrameInput, RepeatPolicy};
use slate_render::{FontMetrics, FontRole, RenderSink};
use slate_style::Theme;
use slate_widgets::{Env, Slot, TreeError, WidgetId, WidgetTree};

use crate::mailbox::{self, Mailbox, TextPoster};
use crate::router::{EventRouter, FrameReport};

/// Startup settings for a [`Shell`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellConfig {
    /// Initial window width in pixels.
    pub width: i32,
    /// Initial window height in pixels.
    pub height: i32,
    pub theme: Theme,
    pub repeat: RepeatPolicy,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            theme: Theme::default(),
            repeat: RepeatPolicy::default(),
        }
    }
}

impl ShellConfig {
    /// Set the initial window size.
    #[must_use]
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width.max(0);
        self.height = height.max(0);
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_repeat(mut self, repeat: RepeatPolicy) -> Self {
        self.repeat = repeat;
        self
    }
}

/// Reasons a [`Shell`] cannot start.
#[derive(Debug)]
pub enum ShellError {
    /// A font role reports lines without positive height.
    DegenerateFontMetrics { role: FontRole },
    /// The root slot holds no widget.
    EmptyRoot,
    /// The tree below the root is malformed.
    InvalidTree(TreeError),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateFontMetrics { role } => {
                write!(f, "font metrics for {role:?} text have no usable line height")
            }
            Self::EmptyRoot => write!(f, "the root slot holds no widget"),
            Self::InvalidTree(err) => write!(f, "invalid widget tree: {err}"),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTree(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TreeError> for ShellError {
    fn from(err: TreeError) -> Self {
        Self::InvalidTree(err)
    }
}

pub struct Shell {
    tree: WidgetTree,
    root: WidgetId,
    router: EventRouter,
    fonts: Box<dyn FontMetrics>,
    theme: Theme,
    repeat: RepeatPolicy,
    size: Rect,
    tick: Tick,
    frames: Arc<AtomicU64>,
    poster: TextPoster,
    mailbox: Mailbox,
}

impl fmt::Debug for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("root", &self.root)
            .field("widgets", &self.tree.len())
            .field("size", &self.size)
            .field("tick", &self.tick)
            .field("router", &self.router)
            .finish_non_exhaustive()
    }
}

impl Shell {
    /// Check the fonts and tree, then lay the tree out at the configured
    /// size.
    pub fn new(
        config: ShellConfig,
        fonts: Box<dyn FontMetrics>,
        tree: WidgetTree,
        root: impl Into<Slot>,
    ) -> Result<Self, ShellError> {
        if let Some(role) = FontRole::ALL
            .into_iter()
            .find(|&role| fonts.line_metrics(role).is_degenerate())
        {
            return Err(ShellError::DegenerateFontMetrics { role });
        }
        let root = root.into().widget().ok_or(ShellError::EmptyRoot)?;
        tree.validate(root)?;

        let (poster, mailbox) = mailbox::channel();
        let mut shell = Self {
            tree,
            root,
            router: EventRouter::new(),
            fonts,
            theme: config.theme,
            repeat: config.repeat,
            size: Rect::from_size(config.width, config.height),
            tick: 0,
            frames: Arc::new(AtomicU64::new(0)),
            poster,
            mailbox,
        };
        shell.layout();
        tracing::info!(
            widgets = shell.tree.len(),
            width = config.width,
            height = config.height,
            "shell started"
        );
        Ok(shell)
    }

    #[must_use]
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// Mutable access for host-side setup, e.g. attaching highlighters.
    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    #[must_use]
    pub const fn root(&self) -> WidgetId {
        self.root
    }

    #[must_use]
    pub const fn router(&self) -> &EventRouter {
        &self.router
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Window rect at the origin.
    #[must_use]
    pub const fn size(&self) -> Rect {
        self.size
    }

    /// Ticks elapsed; one per `update`.
    #[must_use]
    pub const fn tick(&self) -> Tick {
        self.tick
    }

    /// Frames completed, readable from any thread.
    #[must_use]
    pub fn frame_counter(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.frames)
    }

    /// A sender for posting text into editors from other threads.
    #[must_use]
    pub fn poster(&self) -> TextPoster {
        self.poster.clone()
    }

    fn env(&self) -> Env<'_> {
        frame_env(self.fonts.as_ref(), &self.theme, self.repeat)
    }

    fn layout(&mut self) {
        let env = frame_env(self.fonts.as_ref(), &self.theme, self.repeat);
        self.tree.set_rect(self.root, self.size, &env);
    }

    /// Adopt a new window size and lay everything out again.
    pub fn resize(&mut self, width: i32, height: i32) {
        let size = Rect::from_size(width.max(0), height.max(0));
        if size == self.size {
            return;
        }
        tracing::debug!(width = size.width, height = size.height, "window resized");
        self.size = size;
        self.layout();
    }

    /// Run one frame: advance the tick, apply posted text, route input.
    pub fn update(&mut self, input: &FrameInput) -> FrameReport {
        self.tick += 1;
        let _span = tracing::debug_span!("frame", tick = self.tick).entered();

        for (target, text) in self.mailbox.drain() {
            match self.tree.editor_mut(target) {
                Some(editor) => editor.set_text(&text),
                None => tracing::warn!(widget = target.index(), "posted text for a widget that is not an editor"),
            }
        }

        let env = frame_env(self.fonts.as_ref(), &self.theme, self.repeat);
        let report = self.router.route_frame(&mut self.tree, self.root, input, &env, self.tick);
        self.frames.store(self.tick, Ordering::Relaxed);
        report
    }

    /// Paint the window background and the whole tree.
    pub fn draw(&self, sink: &mut dyn RenderSink) {
        let env = self.env();
        sink.fill_rect(self.size, env.palette().bg_strong);
        self.tree.draw(self.root, sink, &env, self.tick);
    }
}

/// Widget environment built from the shell's parts.
///
/// Takes fields rather than `&Shell` so callers can still borrow the tree
/// mutably.
fn frame_env<'a>(fonts: &'a dyn FontMetrics, theme: &'a Theme, repeat: RepeatPolicy) -> Env<'a> {
    Env::new(fonts, theme).with_repeat(repeat)
}
