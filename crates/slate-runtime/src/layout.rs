#![forbid(unsafe_code)]

//! The stock shell layout.
//!
//! ```text
//! ┌ File  Edit  Code ───────────────────────────────┐
//! │ status      ┃ Text editor │ Blue │ Green │ Red  │
//! │ (read-only) ┃                                   │
//! │             ┃ editor / colour panes             │
//! └─────────────┸───────────────────────────────────┘
//! ```

use slate_core::event::{KeyCode, Modifiers};
use slate_core::keybinding::KeyShortcut;
use slate_style::Palette;
use slate_widgets::{
    Axis, BorderMode, ColorPane, MenuBar, MenuItem, Splitter, TabContainer, TextEditor, WidgetId,
    WidgetTree,
};

/// Initial width of the status column.
pub const STATUS_WIDTH: i32 = 200;

/// The stock tree and handles to the widgets hosts usually need.
#[derive(Debug, Clone)]
pub struct DefaultLayout {
    pub tree: WidgetTree,
    /// Root widget: the menu bar.
    pub root: WidgetId,
    /// Read-only status editor in the left column.
    pub status: WidgetId,
    /// Main editor in the first tab.
    pub editor: WidgetId,
    pub tabs: WidgetId,
    pub splitter: WidgetId,
}

fn menus() -> Vec<MenuItem> {
    let ctrl = KeyShortcut::ctrl;
    vec![
        MenuItem::new("File").with_children(vec![
            MenuItem::new("Save")
                .with_shortcut(ctrl(KeyCode::Char('s')))
                .with_action("file.save"),
            MenuItem::new("Save as")
                .with_shortcut(KeyShortcut::new(Modifiers::CTRL | Modifiers::SHIFT, KeyCode::Char('s')))
                .with_action("file.save_as"),
            MenuItem::new("Open")
                .with_shortcut(ctrl(KeyCode::Char('o')))
                .with_action("file.open"),
            MenuItem::new("Close")
                .with_shortcut(ctrl(KeyCode::Char('w')))
                .with_action("file.close"),
            MenuItem::new("Quit")
                .with_shortcut(ctrl(KeyCode::Char('q')))
                .with_action("app.quit"),
        ]),
        MenuItem::new("Edit").with_children(vec![
            MenuItem::new("Copy")
                .with_shortcut(ctrl(KeyCode::Char('c')))
                .with_action("edit.copy"),
            MenuItem::new("Cut")
                .with_shortcut(ctrl(KeyCode::Char('x')))
                .with_action("edit.cut"),
            MenuItem::new("Paste")
                .with_shortcut(ctrl(KeyCode::Char('v')))
                .with_action("edit.paste"),
        ]),
        MenuItem::new("Code").with_children(vec![MenuItem::new("Go To").with_children(vec![
            MenuItem::new("Symbol Definition")
                .with_shortcut(KeyShortcut::plain(KeyCode::F(12)))
                .with_action("code.goto_definition"),
        ])]),
    ]
}

/// Build the stock layout with pane colours from `palette`.
#[must_use]
pub fn default_layout(palette: &Palette) -> DefaultLayout {
    let mut tree = WidgetTree::new();
    let status = tree.add(TextEditor::new().read_only(true));
    let editor = tree.add(TextEditor::new());
    let blue = tree.add(ColorPane::new(palette.blue_muted));
    let green = tree.add(ColorPane::new(palette.green_muted));
    let red = tree.add(ColorPane::new(palette.red_muted));
    let tabs = tree.add(
        TabContainer::new()
            .with_tab("Text editor", editor)
            .with_tab("Blue", blue)
            .with_tab("Green", green)
            .with_tab("Red", red),
    );
    let splitter = tree.add(
        Splitter::new(Axis::Horizontal, status, tabs)
            .with_split(STATUS_WIDTH)
            .with_border(2, BorderMode::ShowOnHover),
    );
    let root = tree.add(MenuBar::new(menus(), splitter));
    DefaultLayout {
        tree,
        root,
        status,
        editor,
        tabs,
        splitter,
    }
}
