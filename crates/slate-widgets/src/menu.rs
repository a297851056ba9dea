#![forbid(unsafe_code)]

//! Menu bar with nested dropdown menus.
//!
//! The bar occupies a strip at the top of its rect; the body slot gets the
//! rest. Clicking a header opens its dropdown. While a dropdown is open,
//! hovering another header retargets it, and hovering inside the dropdown
//! moves the highlight and opens submenus.
//!
//! A click on a leaf entry records its action id, which the frame loop
//! drains with [`MenuBar::take_activated`], and closes the menu. A click in
//! the body while a dropdown is open closes the dropdown and still reaches
//! the body widget.
//!
//! Dropdown regions are recomputed whenever the open menu or its hover
//! state changes and serve both painting and hit testing.

use slate_core::geometry::{Point, Rect};
use slate_core::keybinding::KeyShortcut;
use slate_render::{DrawExt, FontRole, RenderSink};
use smallvec::{SmallVec, smallvec};

use crate::{Env, Route, Slot};

/// An entry in a menu; entries with children open a submenu.
#[derive(Debug, Clone)]
pub struct MenuItem {
    text: String,
    children: Vec<MenuItem>,
    shortcut: Option<KeyShortcut>,
    action: Option<String>,
    hovered: Option<usize>,
    item_rects: Vec<Rect>,
}

impl MenuItem {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
            shortcut: None,
            action: None,
            hovered: None,
            item_rects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    /// Shortcut label shown next to the entry.
    #[must_use]
    pub fn with_shortcut(mut self, shortcut: KeyShortcut) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    /// Action id reported when the entry is clicked.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn children(&self) -> &[MenuItem] {
        &self.children
    }

    #[must_use]
    pub fn shortcut(&self) -> Option<KeyShortcut> {
        self.shortcut
    }

    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Highlighted child of this entry's dropdown.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Child rects from the last dropdown layout.
    #[must_use]
    pub fn item_rects(&self) -> &[Rect] {
        &self.item_rects
    }

    fn label_width(&self, env: &Env<'_>) -> i32 {
        let text = env.fonts.text_width(FontRole::Menu, &self.text);
        match self.shortcut {
            Some(shortcut) => {
                let label = shortcut.to_string();
                text + 2 * env.metrics().menu_x_padding
                    + env.fonts.text_width(FontRole::Menu, &label)
            }
            None => text,
        }
    }

    /// Lay out this entry's dropdown at `top_left`, appending the box and
    /// those of open submenus to `regions`.
    fn layout_dropdown(&mut self, top_left: Point, env: &Env<'_>, regions: &mut Vec<Rect>) {
        self.item_rects.clear();
        if self.children.is_empty() {
            return;
        }
        let metrics = env.metrics();
        let row_h = env.fonts.line_metrics(FontRole::Menu).height + metrics.menu_y_padding;
        let width = self
            .children
            .iter()
            .map(|child| child.label_width(env))
            .max()
            .unwrap_or(0)
            + 2 * metrics.menu_x_padding;
        let rows = i32::try_from(self.children.len()).unwrap_or(i32::MAX);
        let height = rows.saturating_mul(row_h) + metrics.menu_y_padding;
        regions.push(Rect::new(top_left.x, top_left.y, width, height));

        let first_row = top_left.y + metrics.menu_y_padding / 2;
        self.item_rects = (0..rows)
            .map(|i| Rect::new(top_left.x, first_row + i * row_h, width, row_h))
            .collect();

        if let Some(h) = self.hovered {
            let row = self.item_rects[h];
            self.children[h].layout_dropdown(Point::new(row.right() - 1, row.y), env, regions);
        }
    }

    fn mouse_over(&mut self, x: i32, y: i32) {
        if let Some(i) = self.item_rects.iter().position(|r| r.contains(x, y)) {
            if let Some(old) = self.hovered.filter(|&old| old != i) {
                self.children[old].reset_hover();
            }
            self.hovered = Some(i);
        }
        if let Some(h) = self.hovered {
            self.children[h].mouse_over(x, y);
        }
    }

    /// Deepest entry under the pointer, open submenus first.
    fn item_at(&self, x: i32, y: i32) -> Option<&MenuItem> {
        if let Some(found) = self.hovered.and_then(|h| self.children[h].item_at(x, y)) {
            return Some(found);
        }
        self.item_rects
            .iter()
            .position(|r| r.contains(x, y))
            .map(|i| &self.children[i])
    }

    fn reset_hover(&mut self) {
        self.hovered = None;
        for child in &mut self.children {
            child.reset_hover();
        }
    }

    /// Paint entries of this dropdown and any open submenu.
    fn draw_open(&self, sink: &mut dyn RenderSink, env: &Env<'_>) {
        let palette = env.palette();
        let metrics = env.metrics();
        let ascent = env.fonts.line_metrics(FontRole::Menu).ascent;

        for (i, (child, row)) in self.children.iter().zip(&self.item_rects).enumerate() {
            if self.hovered == Some(i) {
                sink.fill_rect(*row, palette.red_muted);
            }
            let baseline = row.y + metrics.menu_y_padding / 2 + ascent;
            sink.draw_text(
                Point::new(row.x + metrics.menu_x_padding, baseline),
                &child.text,
                FontRole::Menu,
                palette.fg_strong,
            );
            if let Some(shortcut) = child.shortcut {
                let label = shortcut.to_string();
                let width = env.fonts.text_width(FontRole::Menu, &label);
                sink.draw_text(
                    Point::new(row.right() - metrics.menu_x_padding - width, baseline),
                    &label,
                    FontRole::Menu,
                    palette.fg_muted,
                );
            }
        }
        if let Some(h) = self.hovered {
            self.children[h].draw_open(sink, env);
        }
    }
}

/// A strip of top-level menus above a body widget.
#[derive(Debug, Clone)]
pub struct MenuBar {
    rect: Rect,
    bar: Rect,
    items: Vec<MenuItem>,
    header_rects: Vec<Rect>,
    open: Option<usize>,
    hovered: Option<usize>,
    dropdown: Vec<Rect>,
    body: Slot,
    activated: Option<String>,
}

impl MenuBar {
    #[must_use]
    pub fn new(items: Vec<MenuItem>, body: impl Into<Slot>) -> Self {
        Self {
            rect: Rect::default(),
            bar: Rect::default(),
            items,
            header_rects: Vec::new(),
            open: None,
            hovered: None,
            dropdown: Vec::new(),
            body: body.into(),
            activated: None,
        }
    }

    /// The whole area, bar plus body.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub const fn bar_rect(&self) -> Rect {
        self.bar
    }

    #[must_use]
    pub const fn body(&self) -> Slot {
        self.body
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    #[must_use]
    pub fn header_rects(&self) -> &[Rect] {
        &self.header_rects
    }

    /// Index of the open top-level menu.
    #[must_use]
    pub const fn open(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub const fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Boxes of the open dropdown and its open submenus.
    #[must_use]
    pub fn dropdown_regions(&self) -> &[Rect] {
        &self.dropdown
    }

    /// Action id of the last clicked entry, cleared on read.
    pub fn take_activated(&mut self) -> Option<String> {
        self.activated.take()
    }

    fn in_bar(&self, y: i32) -> bool {
        y >= self.bar.y && y < self.bar.bottom()
    }

    fn in_dropdown(&self, x: i32, y: i32) -> bool {
        self.open.is_some() && self.dropdown.iter().any(|r| r.contains(x, y))
    }

    fn header_at(&self, x: i32, y: i32) -> Option<usize> {
        self.header_rects.iter().position(|r| r.contains(x, y))
    }

    fn refresh_dropdown(&mut self, env: &Env<'_>) {
        self.dropdown.clear();
        let Some(open) = self.open else {
            return;
        };
        match self.header_rects.get(open).copied() {
            Some(header) if !header.is_empty() => {
                if let Some(item) = self.items.get_mut(open) {
                    item.layout_dropdown(header.bottom_left(), env, &mut self.dropdown);
                }
            }
            // The header no longer fits in the bar.
            _ => self.close(),
        }
    }

    fn open_menu(&mut self, index: usize, env: &Env<'_>) {
        if self.open != Some(index) {
            self.close();
            slate_core::debug!(menu = index, "menu opened");
            self.open = Some(index);
        }
        self.refresh_dropdown(env);
    }

    fn close(&mut self) {
        if let Some(open) = self.open.take() {
            if let Some(item) = self.items.get_mut(open) {
                item.reset_hover();
            }
            slate_core::debug!(menu = open, "menu closed");
        }
        self.dropdown.clear();
    }

    pub(crate) fn set_rect(&mut self, rect: Rect, env: &Env<'_>) -> SmallVec<[(Slot, Rect); 4]> {
        let metrics = env.metrics();
        let (bar, body) = rect.split_y(metrics.menu_bar_height());
        self.rect = rect;
        self.bar = bar;

        // Headers are clipped to the bar; ones past its right edge are empty.
        let mut x = rect.x;
        self.header_rects.clear();
        for item in &self.items {
            let width = env.fonts.text_width(FontRole::Menu, item.text()) + 2 * metrics.menu_bar_x_padding;
            self.header_rects.push(Rect::new(x, bar.y, width, bar.height).intersection(&bar));
            x += width;
        }
        self.refresh_dropdown(env);

        smallvec![(self.body, body)]
    }

    pub(crate) fn mouse_over(&mut self, x: i32, y: i32, env: &Env<'_>) -> Route {
        if self.in_bar(y) {
            self.hovered = self.header_at(x, y);
            if let (Some(_), Some(hovered)) = (self.open, self.hovered) {
                self.open_menu(hovered, env);
            }
            return Route::Consume;
        }
        if self.in_dropdown(x, y) {
            if let Some(item) = self.open.and_then(|open| self.items.get_mut(open)) {
                item.mouse_over(x, y);
            }
            self.refresh_dropdown(env);
            return Route::Consume;
        }
        Route::into_slot(self.body)
    }

    pub(crate) fn mouse_down(&mut self, x: i32, y: i32, env: &Env<'_>) -> Route {
        if self.in_bar(y) {
            if let Some(index) = self.header_at(x, y) {
                self.open_menu(index, env);
            }
            return Route::Consume;
        }
        if self.in_dropdown(x, y) {
            self.click_entry(x, y);
            return Route::Consume;
        }
        self.close();
        Route::into_slot(self.body)
    }

    pub(crate) fn mouse_up(&mut self, x: i32, y: i32) -> Route {
        if self.in_bar(y) || self.in_dropdown(x, y) {
            return Route::Consume;
        }
        Route::into_slot(self.body)
    }

    pub(crate) fn mouse_out(&mut self) {
        self.hovered = None;
        self.close();
    }

    fn click_entry(&mut self, x: i32, y: i32) {
        let Some(item) = self.open.and_then(|open| self.items.get(open)) else {
            return;
        };
        let Some(entry) = item.item_at(x, y) else {
            return;
        };
        if !entry.children.is_empty() {
            return;
        }
        match entry.action.clone() {
            Some(action) => {
                slate_core::info!(action = action.as_str(), "menu action activated");
                self.activated = Some(action);
            }
            None => {
                slate_core::warn!(entry = entry.text.as_str(), "menu entry has no action");
            }
        }
        self.close();
    }

    /// Paint the bar and any open dropdown; the body is drawn by the tree
    /// first so the dropdown overlays it.
    pub(crate) fn draw(&self, sink: &mut dyn RenderSink, env: &Env<'_>) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("widget_draw", widget = "MenuBar", open = ?self.open).entered();

        let palette = env.palette();
        let metrics = env.metrics();
        let descent = env.fonts.line_metrics(FontRole::Menu).descent;

        sink.fill_rect(self.bar, palette.bg_muted);
        for region in &self.dropdown {
            sink.fill_rect(*region, palette.bg_muted);
            sink.stroke_rect(*region, palette.fg_muted);
        }
        for (i, (item, header)) in self.items.iter().zip(&self.header_rects).enumerate() {
            if header.is_empty() {
                continue;
            }
            if self.hovered == Some(i) {
                sink.fill_rect(*header, palette.bg_strong);
            }
            let baseline = header.bottom() - metrics.menu_bar_y_padding - descent / 2;
            sink.draw_text(
                Point::new(header.x + metrics.menu_bar_x_padding, baseline),
                item.text(),
                FontRole::Menu,
                palette.fg_strong,
            );
        }
        if let Some(item) = self.open.and_then(|open| self.items.get(open)) {
            item.draw_open(sink, env);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::event::KeyCode;
    use slate_render::{DrawList, MonospaceMetrics};
    use slate_style::Theme;

    // Menu face of 10px: 6px per char, line height 10, so rows are 20px.
    fn fonts() -> MonospaceMetrics {
        MonospaceMetrics::from_sizes(18, 10, 14)
    }

    fn menus() -> Vec<MenuItem> {
        vec![
            MenuItem::new("File").with_children(vec![
                MenuItem::new("Save")
                    .with_shortcut(KeyShortcut::ctrl(KeyCode::Char('s')))
                    .with_action("file.save"),
                MenuItem::new("Close"),
            ]),
            MenuItem::new("Code").with_children(vec![MenuItem::new("Go To").with_children(vec![
                MenuItem::new("Symbol Definition").with_action("code.goto_definition"),
            ])]),
        ]
    }

    struct Fixture {
        fonts: MonospaceMetrics,
        theme: Theme,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                fonts: fonts(),
                theme: Theme::default(),
            }
        }

        fn env(&self) -> Env<'_> {
            Env::new(&self.fonts, &self.theme)
        }

        fn bar(&self) -> MenuBar {
            let mut bar = MenuBar::new(menus(), Slot::Empty);
            bar.set_rect(Rect::new(0, 0, 400, 300), &self.env());
            bar
        }
    }

    #[test]
    fn headers_and_body_layout() {
        let fx = Fixture::new();
        let mut bar = MenuBar::new(menus(), Slot::Empty);
        let children = bar.set_rect(Rect::new(0, 0, 400, 300), &fx.env());
        // 4 chars * 6px + 2 * 8px padding; bar height 14 + 2 * 4.
        assert_eq!(bar.header_rects(), [Rect::new(0, 0, 40, 22), Rect::new(40, 0, 40, 22)]);
        assert_eq!(children[0].1, Rect::new(0, 22, 400, 278));
    }

    #[test]
    fn click_header_opens_dropdown() {
        let fx = Fixture::new();
        let mut bar = fx.bar();
        assert_eq!(bar.mouse_down(5, 5, &fx.env()), Route::Consume);
        assert_eq!(bar.open(), Some(0));
        // "Save" + shortcut label "Ctrl + S" (8 chars) is the widest entry:
        // 24 + 20 + 48 + 2 * 10 padding = 112 wide; 2 rows of 20 + 10 tall.
        assert_eq!(bar.dropdown_regions(), [Rect::new(0, 22, 112, 50)]);
        assert_eq!(bar.items()[0].item_rects()[1], Rect::new(0, 47, 112, 20));
    }

    #[test]
    fn hover_retargets_open_menu() {
        let fx = Fixture::new();
        let mut bar = fx.bar();
        bar.mouse_over(5, 5, &fx.env());
        assert_eq!(bar.hovered(), Some(0));
        assert_eq!(bar.open(), None, "hover alone does not open");

        bar.mouse_down(5, 5, &fx.env());
        bar.mouse_over(45, 5, &fx.env());
        assert_eq!(bar.open(), Some(1));
        assert_eq!(bar.dropdown_regions()[0].x, 40);
    }

    #[test]
    fn hovering_parent_entry_opens_submenu() {
        let fx = Fixture::new();
        let mut bar = fx.bar();
        bar.mouse_down(45, 5, &fx.env());
        let row = bar.items()[1].item_rects()[0];
        assert_eq!(bar.mouse_over(row.x + 2, row.y + 2, &fx.env()), Route::Consume);
        assert_eq!(bar.items()[1].hovered(), Some(0));
        let regions = bar.dropdown_regions();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[1].x, regions[0].right() - 1);
        assert_eq!(regions[1].y, row.y);
    }

    #[test]
    fn clicking_leaf_records_action_and_closes() {
        let fx = Fixture::new();
        let mut bar = fx.bar();
        bar.mouse_down(5, 5, &fx.env());
        let save = bar.items()[0].item_rects()[0];
        assert_eq!(bar.mouse_down(save.x + 3, save.y + 3, &fx.env()), Route::Consume);
        assert_eq!(bar.take_activated().as_deref(), Some("file.save"));
        assert_eq!(bar.take_activated(), None);
        assert_eq!(bar.open(), None);
        assert!(bar.dropdown_regions().is_empty());
    }

    #[test]
    fn nested_leaf_activates() {
        let fx = Fixture::new();
        let mut bar = fx.bar();
        bar.mouse_down(45, 5, &fx.env());
        let goto = bar.items()[1].item_rects()[0];
        bar.mouse_over(goto.x + 2, goto.y + 2, &fx.env());
        let symbol = bar.items()[1].children()[0].item_rects()[0];
        bar.mouse_over(symbol.x + 2, symbol.y + 2, &fx.env());
        bar.mouse_down(symbol.x + 2, symbol.y + 2, &fx.env());
        assert_eq!(bar.take_activated().as_deref(), Some("code.goto_definition"));
    }

    #[test]
    fn clicking_parent_entry_keeps_menu_open() {
        let fx = Fixture::new();
        let mut bar = fx.bar();
        bar.mouse_down(45, 5, &fx.env());
        let goto = bar.items()[1].item_rects()[0];
        bar.mouse_down(goto.x + 2, goto.y + 2, &fx.env());
        assert_eq!(bar.open(), Some(1));
        assert_eq!(bar.take_activated(), None);
    }

    #[test]
    fn entry_without_action_closes_quietly() {
        let fx = Fixture::new();
        let mut bar = fx.bar();
        bar.mouse_down(5, 5, &fx.env());
        let close = bar.items()[0].item_rects()[1];
        bar.mouse_down(close.x + 2, close.y + 2, &fx.env());
        assert_eq!(bar.take_activated(), None);
        assert_eq!(bar.open(), None);
    }

    #[test]
    fn outside_click_closes_and_routes_to_body() {
        let fx = Fixture::new();
        let mut bar = fx.bar();
        bar.mouse_down(5, 5, &fx.env());
        assert_eq!(bar.mouse_down(300, 200, &fx.env()), Route::Miss);
        assert_eq!(bar.open(), None);
    }

    #[test]
    fn mouse_out_clears_hover_and_closes() {
        let fx = Fixture::new();
        let mut bar = fx.bar();
        bar.mouse_down(5, 5, &fx.env());
        bar.mouse_over(5, 5, &fx.env());
        bar.mouse_out();
        assert_eq!(bar.hovered(), None);
        assert_eq!(bar.open(), None);
    }

    #[test]
    fn short_rect_clips_bar_and_headers() {
        let fx = Fixture::new();
        let mut bar = MenuBar::new(menus(), Slot::Empty);
        let children = bar.set_rect(Rect::new(0, 0, 60, 10), &fx.env());
        assert_eq!(bar.bar_rect(), Rect::new(0, 0, 60, 10));
        assert_eq!(bar.header_rects(), [Rect::new(0, 0, 40, 10), Rect::new(40, 0, 20, 10)]);
        assert_eq!(children[0].1, Rect::new(0, 10, 60, 0));
    }

    #[test]
    fn open_menu_closes_when_its_header_is_clipped_away() {
        let fx = Fixture::new();
        let mut bar = fx.bar();
        bar.mouse_down(45, 5, &fx.env());
        assert_eq!(bar.open(), Some(1));
        bar.set_rect(Rect::new(0, 0, 30, 300), &fx.env());
        assert_eq!(bar.header_rects()[1], Rect::default());
        assert_eq!(bar.open(), None);
        assert!(bar.dropdown_regions().is_empty());
    }

    #[test]
    fn mouse_up_in_dropdown_is_consumed() {
        let fx = Fixture::new();
        let mut bar = fx.bar();
        bar.mouse_down(5, 5, &fx.env());
        assert_eq!(bar.mouse_up(10, 30), Route::Consume);
        assert_eq!(bar.mouse_up(300, 200), Route::Miss);
    }

    #[test]
    fn draw_paints_open_entries_and_shortcuts() {
        let fx = Fixture::new();
        let mut bar = fx.bar();
        bar.mouse_down(5, 5, &fx.env());
        let mut list = DrawList::new();
        bar.draw(&mut list, &fx.env());
        assert_eq!(list.texts(), ["File", "Code", "Save", "Ctrl + S", "Close"]);
        assert_eq!(list.lines_with(fx.theme.palette.fg_muted), 4, "dropdown outline");
    }
}
