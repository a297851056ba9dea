#![forbid(unsafe_code)]

//! Text editor widget.
//!
//! Wraps a [`TextBuffer`] with keyboard handling, vertical scrolling, and
//! optional syntax highlighting. Keys are resolved through a static
//! shortcut table ([`keymap`]) with the exact modifier set held this
//! frame. A key counts when it was just pressed or is repeating under the
//! [`RepeatPolicy`](slate_core::input::RepeatPolicy) carried in the
//! [`Env`].
//!
//! Read-only editors still accept navigation keys but ignore edits and
//! typed text, and draw no cursor.

use std::sync::{Arc, LazyLock};

use slate_core::Tick;
use slate_core::event::KeyCode;
use slate_core::geometry::{Point, Rect};
use slate_core::input::FrameInput;
use slate_core::keybinding::{KeyShortcut, ShortcutMap};
use slate_render::{DrawExt, FontRole, GlyphRun, PackedRgba, RenderSink, TextLayer};
use slate_text::{Highlighter, TextBuffer, highlight_line};

use crate::{Env, Route};

/// Rows of the fading shadow drawn under the top edge when scrolled.
const SHADOW_ROWS: i32 = 9;

/// What a key does to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorAction {
    LineEnd,
    LineStart,
    Backspace,
    Tab,
    Newline,
    Left,
    Right,
    Up,
    Down,
    SelectAll,
}

impl EditorAction {
    /// Whether the action changes the text.
    #[must_use]
    pub const fn mutates(self) -> bool {
        matches!(self, Self::Backspace | Self::Tab | Self::Newline)
    }
}

static KEYMAP: LazyLock<ShortcutMap<EditorAction>> = LazyLock::new(|| {
    ShortcutMap::new()
        .bind(KeyShortcut::plain(KeyCode::End), EditorAction::LineEnd)
        .bind(KeyShortcut::plain(KeyCode::Home), EditorAction::LineStart)
        .bind(KeyShortcut::plain(KeyCode::Backspace), EditorAction::Backspace)
        .bind(KeyShortcut::plain(KeyCode::Tab), EditorAction::Tab)
        .bind(KeyShortcut::plain(KeyCode::Enter), EditorAction::Newline)
        .bind(KeyShortcut::plain(KeyCode::Left), EditorAction::Left)
        .bind(KeyShortcut::plain(KeyCode::Right), EditorAction::Right)
        .bind(KeyShortcut::plain(KeyCode::Up), EditorAction::Up)
        .bind(KeyShortcut::plain(KeyCode::Down), EditorAction::Down)
        .bind(KeyShortcut::ctrl(KeyCode::Char('a')), EditorAction::SelectAll)
});

/// The editor's shortcut table, built on first use.
#[must_use]
pub fn keymap() -> &'static ShortcutMap<EditorAction> {
    &KEYMAP
}

#[derive(Debug, Clone, Default)]
pub struct TextEditor {
    rect: Rect,
    buffer: TextBuffer,
    read_only: bool,
    focused: bool,
    highlighter: Option<Arc<Highlighter>>,
    scroll_top: usize,
}

impl TextEditor {
    /// An empty, editable editor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.buffer.set_text(text);
        self
    }

    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    #[must_use]
    pub fn with_highlighter(mut self, highlighter: Arc<Highlighter>) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    pub fn set_highlighter(&mut self, highlighter: Option<Arc<Highlighter>>) {
        self.highlighter = highlighter;
    }

    #[must_use]
    pub fn highlighter(&self) -> Option<&Highlighter> {
        self.highlighter.as_deref()
    }

    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    /// Whole document.
    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Replace the document; the cursor is clamped, not reset.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        let last = self.buffer.line_count() - 1;
        self.scroll_top = self.scroll_top.min(last);
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// First document row shown at the top of the widget.
    #[must_use]
    pub const fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub(crate) fn mouse_over(&mut self) -> Route {
        Route::Consume
    }

    pub(crate) fn mouse_down(&mut self) -> Route {
        self.focused = true;
        Route::Consume
    }

    pub(crate) fn mouse_up(&mut self) -> Route {
        Route::Consume
    }

    pub(crate) fn keyboard_focus_lost(&mut self) {
        self.focused = false;
    }

    /// Apply one frame of keyboard input.
    pub(crate) fn take_keyboard(&mut self, input: &FrameInput, env: &Env<'_>, tick: Tick) {
        self.buffer.set_tick(tick);
        self.focused = true;

        let keymap = keymap();
        for code in input.triggered_keys(&env.repeat) {
            let Some(&action) = keymap.lookup(input.modifiers, code) else {
                continue;
            };
            if self.read_only && action.mutates() {
                continue;
            }
            self.apply(action);
        }

        if !self.read_only && !input.modifiers.suppresses_text() {
            let typed: String = input.typed.chars().filter(|c| !c.is_control()).collect();
            if !typed.is_empty() {
                self.buffer.insert_text(&typed);
            }
        }

        self.ensure_cursor_visible(env);
    }

    fn apply(&mut self, action: EditorAction) {
        slate_core::trace!(?action, "editor action");
        let buffer = &mut self.buffer;
        match action {
            EditorAction::LineEnd => buffer.move_to_line_end(),
            EditorAction::LineStart => buffer.move_to_line_start(),
            EditorAction::Backspace => buffer.backspace(),
            EditorAction::Tab => buffer.insert_tab(),
            EditorAction::Newline => buffer.newline(),
            EditorAction::Left => buffer.cursor_left(),
            EditorAction::Right => buffer.cursor_right(),
            EditorAction::Up => buffer.cursor_up(),
            EditorAction::Down => buffer.cursor_down(),
            EditorAction::SelectAll => buffer.select_all(),
        }
    }

    fn row_height(env: &Env<'_>) -> i32 {
        env.fonts.line_metrics(FontRole::Code).height.max(1)
    }

    /// Whole rows that fit below the top padding, at least one.
    fn visible_rows(&self, env: &Env<'_>) -> usize {
        let usable = self.rect.height - env.metrics().text_top_padding;
        usize::try_from(usable / Self::row_height(env)).unwrap_or(0).max(1)
    }

    fn ensure_cursor_visible(&mut self, env: &Env<'_>) {
        let rows = self.visible_rows(env);
        let row = self.buffer.cursor().row;
        if row < self.scroll_top {
            self.scroll_top = row;
        } else if row >= self.scroll_top + rows {
            self.scroll_top = row + 1 - rows;
        }
    }

    pub(crate) fn draw(&self, sink: &mut dyn RenderSink, env: &Env<'_>, tick: Tick) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_draw",
            widget = "TextEditor",
            lines = self.buffer.line_count(),
            scroll_top = self.scroll_top
        )
        .entered();

        let palette = env.palette();
        let metrics = env.metrics();
        let line = env.fonts.line_metrics(FontRole::Code);
        let row_h = Self::row_height(env);

        sink.fill_rect(self.rect, palette.bg_muted);

        // One partially visible row below the last whole one.
        let rows = self.visible_rows(env) + 1;
        let mut layer = TextLayer::new(self.rect.width, self.rect.height);
        let shown = self.buffer.lines().iter().skip(self.scroll_top).take(rows);
        for (visible, text) in (0i32..).zip(shown) {
            let baseline = metrics.text_top_padding + line.ascent + visible * row_h;
            match &self.highlighter {
                Some(highlighter) => {
                    let spans = highlight_line(text, highlighter.rules(), palette, palette.fg_muted);
                    for span in spans {
                        let x = env.fonts.text_width(FontRole::Code, &text[..span.range.start]);
                        layer.push_run(GlyphRun {
                            origin: Point::new(x, baseline),
                            text: text[span.range].to_owned(),
                            role: FontRole::Code,
                            color: span.fg,
                            background: span.bg,
                        });
                    }
                }
                None => layer.push_text(Point::new(0, baseline), text.as_str(), FontRole::Code, palette.fg_muted),
            }
        }
        sink.blit_layer(&layer, self.rect.min());

        if self.scroll_top > 0 {
            for i in 0..SHADOW_ROWS {
                let alpha = u8::try_from(70 - 5 * i).unwrap_or(0);
                sink.hline(self.rect, self.rect.y + i, PackedRgba::BLACK.with_alpha(alpha));
            }
        }

        if self.read_only || !self.focused {
            return;
        }
        if !slate_text::cursor_visible(tick, self.buffer.last_interaction(), metrics.blink_period) {
            return;
        }
        let cursor = self.buffer.cursor();
        let Some(visible) = cursor
            .row
            .checked_sub(self.scroll_top)
            .filter(|&v| v < rows)
            .and_then(|v| i32::try_from(v).ok())
        else {
            return;
        };
        let text = self.buffer.line(cursor.row).unwrap_or_default();
        let x = self.rect.x + env.fonts.prefix_width(FontRole::Code, text, cursor.col) + 1;
        let top = self.rect.y + metrics.text_top_padding + visible * row_h;
        sink.draw_line(Point::new(x, top), Point::new(x, top + row_h), palette.fg_muted);
    }
}
