#![forbid(unsafe_code)]

//! Mouse and keyboard routing through a composed widget tree.

use slate_core::event::{CursorShape, KeyCode};
use slate_core::geometry::Rect;
use slate_core::input::FrameInput;
use slate_core::keybinding::KeyShortcut;
use slate_render::{MonospaceMetrics, PackedRgba};
use slate_style::Theme;
use slate_widgets::{
    Axis, BorderMode, ColorPane, Env, MenuBar, MenuItem, Splitter, TabContainer, TextEditor,
    WidgetId, WidgetTree,
};

struct Fixture {
    tree: WidgetTree,
    root: WidgetId,
    status: WidgetId,
    splitter: WidgetId,
    tabs: WidgetId,
    editor: WidgetId,
}

// Default metrics: main text 10px per char, menu and code 8px per char.
//
//   menu bar   y 0..22    File (0..48)  Edit (48..96)
//   splitter   y 22..600  divider at x = 200
//   tabs       x 200..800 "Text editor" (200..336)  "Blue" (336..402), body from y = 48
fn fixture(fonts: &MonospaceMetrics, theme: &Theme) -> Fixture {
    let env = Env::new(fonts, theme);
    let mut tree = WidgetTree::new();
    let status = tree.add(TextEditor::new().with_text("ready").read_only(true));
    let editor = tree.add(TextEditor::new());
    let blue = tree.add(ColorPane::new(theme.palette.blue_muted));
    let tabs = tree.add(
        TabContainer::new()
            .with_tab("Text editor", editor)
            .with_tab("Blue", blue),
    );
    let splitter = tree.add(
        Splitter::new(Axis::Horizontal, status, tabs)
            .with_split(200)
            .with_border(2, BorderMode::ShowOnHover),
    );
    let menu = tree.add(MenuBar::new(
        vec![
            MenuItem::new("File").with_children(vec![
                MenuItem::new("Save")
                    .with_shortcut(KeyShortcut::ctrl(KeyCode::Char('s')))
                    .with_action("file.save"),
                MenuItem::new("Quit").with_action("app.quit"),
            ]),
            MenuItem::new("Edit").with_children(vec![MenuItem::new("Copy")]),
        ],
        splitter,
    ));
    tree.validate(menu).unwrap();
    tree.set_rect(menu, Rect::new(0, 0, 800, 600), &env);
    Fixture {
        tree,
        root: menu,
        status,
        splitter,
        tabs,
        editor,
    }
}

#[test]
fn hovering_a_tab_header_only_highlights_it() {
    let fonts = MonospaceMetrics::default();
    let theme = Theme::default();
    let env = Env::new(&fonts, &theme);
    let mut s = fixture(&fonts, &theme);

    assert_eq!(s.tree.mouse_over(s.root, 350, 30, &env), Some(s.tabs));
    let tabs = s.tree.tabs(s.tabs).unwrap();
    assert_eq!(tabs.hovered(), Some(1));
    assert_eq!(tabs.current(), 0);
}

#[test]
fn clicking_a_tab_header_switches_panes() {
    let fonts = MonospaceMetrics::default();
    let theme = Theme::default();
    let env = Env::new(&fonts, &theme);
    let mut s = fixture(&fonts, &theme);

    assert_eq!(s.tree.mouse_down(s.root, 350, 30, &env), Some(s.tabs));
    let tabs = s.tree.tabs(s.tabs).unwrap();
    assert_eq!(tabs.current(), 1);
    assert_eq!(tabs.hovered(), None, "a click does not hover");

    // The body now belongs to the colour pane, which takes no events.
    assert_eq!(s.tree.mouse_down(s.root, 500, 300, &env), None);
}

#[test]
fn splitter_keeps_proportion_across_resizes() {
    let fonts = MonospaceMetrics::default();
    let theme = Theme::default();
    let env = Env::new(&fonts, &theme);
    let mut tree = WidgetTree::new();
    let left = tree.add(ColorPane::new(PackedRgba::WHITE));
    let right = tree.add(ColorPane::new(PackedRgba::BLACK));
    let root = tree.add(Splitter::new(Axis::Horizontal, left, right).with_split(200));

    tree.set_rect(root, Rect::new(0, 0, 400, 100), &env);
    assert_eq!(tree.splitter(root).unwrap().split(), 200);
    tree.set_rect(root, Rect::new(0, 0, 800, 100), &env);
    assert_eq!(tree.splitter(root).unwrap().split(), 400);
    assert_eq!(tree.color_pane(right).unwrap().rect(), Rect::new(400, 0, 400, 100));
}

#[test]
fn dragging_the_divider_resizes_both_sides() {
    let fonts = MonospaceMetrics::default();
    let theme = Theme::default();
    let env = Env::new(&fonts, &theme);
    let mut s = fixture(&fonts, &theme);

    assert_eq!(s.tree.mouse_over(s.root, 202, 300, &env), Some(s.splitter));
    assert_eq!(s.tree.cursor_shape(), CursorShape::EwResize);
    assert_eq!(s.tree.mouse_down(s.root, 202, 300, &env), Some(s.splitter));
    s.tree.mouse_over(s.root, 300, 310, &env);
    s.tree.mouse_up(s.root, 300, 310);

    assert_eq!(s.tree.splitter(s.splitter).unwrap().split(), 300);
    assert_eq!(s.tree.editor(s.status).unwrap().rect().width, 300);
    assert_eq!(s.tree.tabs(s.tabs).unwrap().rect().x, 300);
    assert_eq!(s.tree.editor(s.editor).unwrap().rect().x, 300);
}

#[test]
fn drag_released_over_the_menu_strip_ends() {
    let fonts = MonospaceMetrics::default();
    let theme = Theme::default();
    let env = Env::new(&fonts, &theme);
    let mut s = fixture(&fonts, &theme);

    assert_eq!(s.tree.mouse_down(s.root, 200, 300, &env), Some(s.splitter));
    assert_eq!(s.tree.mouse_over(s.root, 260, 5, &env), Some(s.splitter));
    assert_eq!(s.tree.splitter(s.splitter).unwrap().split(), 260);
    assert_eq!(s.tree.mouse_up(s.root, 260, 5), Some(s.splitter));
    assert!(!s.tree.splitter(s.splitter).unwrap().is_dragging());

    assert_eq!(s.tree.mouse_over(s.root, 500, 300, &env), Some(s.editor));
    assert_eq!(s.tree.splitter(s.splitter).unwrap().split(), 260);
    assert_eq!(s.tree.menu_bar(s.root).unwrap().open(), None);
}

#[test]
fn open_menu_follows_hovered_header() {
    let fonts = MonospaceMetrics::default();
    let theme = Theme::default();
    let env = Env::new(&fonts, &theme);
    let mut s = fixture(&fonts, &theme);

    assert_eq!(s.tree.mouse_down(s.root, 10, 10, &env), Some(s.root));
    assert_eq!(s.tree.menu_bar(s.root).unwrap().open(), Some(0));
    assert_eq!(s.tree.mouse_over(s.root, 60, 10, &env), Some(s.root));
    let menu = s.tree.menu_bar(s.root).unwrap();
    assert_eq!(menu.open(), Some(1));
    assert_eq!(menu.dropdown_regions()[0].x, 48);
}

#[test]
fn dropdown_shadows_widgets_below_it() {
    let fonts = MonospaceMetrics::default();
    let theme = Theme::default();
    let env = Env::new(&fonts, &theme);
    let mut s = fixture(&fonts, &theme);

    s.tree.mouse_down(s.root, 10, 10, &env);
    let save = s.tree.menu_bar(s.root).unwrap().items()[0].item_rects()[0];
    // The status editor sits under the dropdown but does not see the hover.
    assert_eq!(s.tree.mouse_over(s.root, save.x + 4, save.y + 4, &env), Some(s.root));
    assert_eq!(s.tree.mouse_down(s.root, save.x + 4, save.y + 4, &env), Some(s.root));
    assert_eq!(s.tree.take_activated(), ["file.save"]);
    assert!(s.tree.take_activated().is_empty());
    assert_eq!(s.tree.menu_bar(s.root).unwrap().open(), None);
}

#[test]
fn click_outside_open_menu_closes_it_and_reaches_the_body() {
    let fonts = MonospaceMetrics::default();
    let theme = Theme::default();
    let env = Env::new(&fonts, &theme);
    let mut s = fixture(&fonts, &theme);

    s.tree.mouse_down(s.root, 10, 10, &env);
    assert_eq!(s.tree.mouse_down(s.root, 500, 300, &env), Some(s.editor));
    assert_eq!(s.tree.menu_bar(s.root).unwrap().open(), None);
    assert!(s.tree.editor(s.editor).unwrap().is_focused());
}

#[test]
fn keyboard_edits_the_clicked_editor() {
    let fonts = MonospaceMetrics::default();
    let theme = Theme::default();
    let env = Env::new(&fonts, &theme);
    let mut s = fixture(&fonts, &theme);

    let focus = s.tree.mouse_down(s.root, 500, 300, &env).unwrap();
    s.tree.take_keyboard(focus, &FrameInput::default().typed("fn main"), &env, 1);
    s.tree.take_keyboard(focus, &FrameInput::default().tap(KeyCode::Enter), &env, 2);
    assert_eq!(s.tree.editor(s.editor).unwrap().text(), "fn main\n");
}

#[test]
fn read_only_status_ignores_typing() {
    let fonts = MonospaceMetrics::default();
    let theme = Theme::default();
    let env = Env::new(&fonts, &theme);
    let mut s = fixture(&fonts, &theme);

    let focus = s.tree.mouse_down(s.root, 50, 300, &env).unwrap();
    assert_eq!(focus, s.status);
    s.tree.take_keyboard(focus, &FrameInput::default().typed("x").tap(KeyCode::Backspace), &env, 1);
    assert_eq!(s.tree.editor(s.status).unwrap().text(), "ready");
}
