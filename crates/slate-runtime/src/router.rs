#![forbid(unsafe_code)]

//! Frame-level event routing.
//!
//! Once per frame, in this order:
//!
//! 1. Hover: `mouse_over` from the root. If the consumer changed,
//!    `mouse_out` goes to the previous one, exactly once.
//! 2. On a press edge, `mouse_down`; a consumer becomes the focus
//!    candidate. A miss leaves focus where it was.
//! 3. On a release edge, `mouse_up`. Focus never changes here.
//! 4. If the candidate differs from the focus holder, the old holder gets
//!    `keyboard_focus_lost` and the candidate takes over.
//! 5. The focus holder, if any, gets `take_keyboard` once.
//!
//! Each step finishes before the next starts; widgets never call back
//! into the router.

use slate_core::Tick;
use slate_core::event::CursorShape;
use slate_core::input::FrameInput;
use slate_widgets::{Env, WidgetId, WidgetTree};

/// What happened during one routed frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Hover consumer after this frame.
    pub hover: Option<WidgetId>,
    /// Focus holder after this frame.
    pub focus: Option<WidgetId>,
    /// Widget that received `mouse_out` this frame.
    pub hover_lost: Option<WidgetId>,
    /// Widget that received `keyboard_focus_lost` this frame.
    pub focus_lost: Option<WidgetId>,
    /// Pointer shape to show.
    pub cursor_shape: CursorShape,
    /// Menu actions activated this frame.
    pub activated: Vec<String>,
}

/// Remembers hover and focus between frames.
#[derive(Debug, Clone, Default)]
pub struct EventRouter {
    hover: Option<WidgetId>,
    focus: Option<WidgetId>,
}

impl EventRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn hover(&self) -> Option<WidgetId> {
        self.hover
    }

    #[must_use]
    pub const fn focus(&self) -> Option<WidgetId> {
        self.focus
    }

    /// Route one frame of input through `tree` starting at `root`.
    pub fn route_frame(
        &mut self,
        tree: &mut WidgetTree,
        root: WidgetId,
        input: &FrameInput,
        env: &Env<'_>,
        tick: Tick,
    ) -> FrameReport {
        let (x, y) = (input.pointer.x, input.pointer.y);
        let mut report = FrameReport::default();

        let hover = tree.mouse_over(root, x, y, env);
        if hover != self.hover {
            if let Some(previous) = self.hover {
                tree.mouse_out(previous);
                report.hover_lost = Some(previous);
            }
            tracing::trace!(from = ?self.hover, to = ?hover, "hover changed");
            self.hover = hover;
        }

        let mut candidate = self.focus;
        if input.left_pressed {
            if let Some(consumer) = tree.mouse_down(root, x, y, env) {
                candidate = Some(consumer);
            }
        }
        if input.left_released {
            tree.mouse_up(root, x, y);
        }

        if candidate != self.focus {
            if let Some(previous) = self.focus {
                tree.keyboard_focus_lost(previous);
                report.focus_lost = Some(previous);
            }
            tracing::debug!(from = ?self.focus, to = ?candidate, "keyboard focus changed");
            self.focus = candidate;
        }

        if let Some(focus) = self.focus {
            tree.take_keyboard(focus, input, env, tick);
        }

        report.hover = self.hover;
        report.focus = self.focus;
        report.cursor_shape = tree.cursor_shape();
        report.activated = tree.take_activated();
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::geometry::Rect;
    use slate_render::{MonospaceMetrics, PackedRgba};
    use slate_style::Theme;
    use slate_widgets::{Axis, ColorPane, Splitter, TextEditor};

    struct Fixture {
        tree: WidgetTree,
        root: WidgetId,
        left: WidgetId,
        right: WidgetId,
    }

    // Two editors side by side, divider at x = 100.
    fn fixture(env: &Env<'_>) -> Fixture {
        let mut tree = WidgetTree::new();
        let left = tree.add(TextEditor::new());
        let right = tree.add(TextEditor::new());
        let root = tree.add(Splitter::new(Axis::Horizontal, left, right).with_split(100));
        tree.set_rect(root, Rect::new(0, 0, 200, 100), env);
        Fixture {
            tree,
            root,
            left,
            right,
        }
    }

    #[test]
    fn hover_change_reports_previous_consumer_once() {
        let fonts = MonospaceMetrics::default();
        let theme = Theme::default();
        let env = Env::new(&fonts, &theme);
        let mut fx = fixture(&env);
        let mut router = EventRouter::new();

        let r = router.route_frame(&mut fx.tree, fx.root, &FrameInput::at(10, 10), &env, 1);
        assert_eq!((r.hover, r.hover_lost), (Some(fx.left), None));
        let r = router.route_frame(&mut fx.tree, fx.root, &FrameInput::at(150, 10), &env, 2);
        assert_eq!((r.hover, r.hover_lost), (Some(fx.right), Some(fx.left)));
        let r = router.route_frame(&mut fx.tree, fx.root, &FrameInput::at(160, 10), &env, 3);
        assert_eq!(r.hover_lost, None);
    }

    #[test]
    fn press_moves_focus_and_reports_loss() {
        let fonts = MonospaceMetrics::default();
        let theme = Theme::default();
        let env = Env::new(&fonts, &theme);
        let mut fx = fixture(&env);
        let mut router = EventRouter::new();

        let r = router.route_frame(&mut fx.tree, fx.root, &FrameInput::at(10, 10).press_left(), &env, 1);
        assert_eq!((r.focus, r.focus_lost), (Some(fx.left), None));
        let r = router.route_frame(&mut fx.tree, fx.root, &FrameInput::at(150, 10).press_left(), &env, 2);
        assert_eq!((r.focus, r.focus_lost), (Some(fx.right), Some(fx.left)));
        assert!(!fx.tree.editor(fx.left).unwrap().is_focused());
        assert!(fx.tree.editor(fx.right).unwrap().is_focused());
    }

    #[test]
    fn press_on_nothing_keeps_focus() {
        let fonts = MonospaceMetrics::default();
        let theme = Theme::default();
        let env = Env::new(&fonts, &theme);
        let mut tree = WidgetTree::new();
        let editor = tree.add(TextEditor::new());
        let pane = tree.add(ColorPane::new(PackedRgba::WHITE));
        let root = tree.add(Splitter::new(Axis::Horizontal, editor, pane).with_split(100));
        tree.set_rect(root, Rect::new(0, 0, 200, 100), &env);
        let mut router = EventRouter::new();

        router.route_frame(&mut tree, root, &FrameInput::at(10, 10).press_left(), &env, 1);
        let r = router.route_frame(&mut tree, root, &FrameInput::at(150, 10).press_left(), &env, 2);
        assert_eq!((r.focus, r.focus_lost), (Some(editor), None));
    }

    #[test]
    fn release_does_not_move_focus() {
        let fonts = MonospaceMetrics::default();
        let theme = Theme::default();
        let env = Env::new(&fonts, &theme);
        let mut fx = fixture(&env);
        let mut router = EventRouter::new();

        router.route_frame(&mut fx.tree, fx.root, &FrameInput::at(10, 10).press_left(), &env, 1);
        let r = router.route_frame(&mut fx.tree, fx.root, &FrameInput::at(150, 10).release_left(), &env, 2);
        assert_eq!(r.focus, Some(fx.left));
    }

    #[test]
    fn keys_go_to_the_focus_holder() {
        let fonts = MonospaceMetrics::default();
        let theme = Theme::default();
        let env = Env::new(&fonts, &theme);
        let mut fx = fixture(&env);
        let mut router = EventRouter::new();

        router.route_frame(&mut fx.tree, fx.root, &FrameInput::at(150, 10).press_left(), &env, 1);
        // Pointer wanders back over the left editor; keys still go right.
        router.route_frame(&mut fx.tree, fx.root, &FrameInput::at(10, 10).typed("ok"), &env, 2);
        assert_eq!(fx.tree.editor(fx.right).unwrap().text(), "ok");
        assert_eq!(fx.tree.editor(fx.left).unwrap().text(), "");
    }

    #[test]
    fn no_focus_means_no_keys() {
        let fonts = MonospaceMetrics::default();
        let theme = Theme::default();
        let env = Env::new(&fonts, &theme);
        let mut fx = fixture(&env);
        let mut router = EventRouter::new();

        let r = router.route_frame(&mut fx.tree, fx.root, &FrameInput::at(10, 10).typed("lost"), &env, 1);
        assert_eq!(r.focus, None);
        assert_eq!(fx.tree.editor(fx.left).unwrap().text(), "");
    }
}
