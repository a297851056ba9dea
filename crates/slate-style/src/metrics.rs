#![forbid(unsafe_code)]

//! Paddings, font sizes, and timing constants used by widget layout.

use slate_core::Tick;

/// Layout constants shared by every widget.
///
/// Font sizes are in pixels and drive header heights independently of the
/// measured line metrics, so a header never shrinks when a backend reports
/// a tight line height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Size of tab titles and general UI text.
    pub main_font_size: i32,
    /// Size of editor text; also the editor row height.
    pub code_font_size: i32,
    /// Size of menu text.
    pub menu_font_size: i32,
    /// Horizontal padding on each side of a tab title.
    pub tab_x_padding: i32,
    /// Vertical padding above and below a tab title.
    pub tab_y_padding: i32,
    /// Horizontal padding on each side of a menu bar header.
    pub menu_bar_x_padding: i32,
    /// Vertical padding above and below the menu bar text.
    pub menu_bar_y_padding: i32,
    /// Horizontal padding inside a dropdown.
    pub menu_x_padding: i32,
    /// Vertical padding between dropdown entries.
    pub menu_y_padding: i32,
    /// Gap between the top of the editor and its first line.
    pub text_top_padding: i32,
    /// Ticks per blink half-period.
    pub blink_period: Tick,
    /// Closest a dragged splitter may get to either edge.
    pub splitter_min_margin: i32,
    /// Half the width of a splitter's grab band.
    pub splitter_half_width: i32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            main_font_size: 18,
            code_font_size: 14,
            menu_font_size: 14,
            tab_x_padding: 13,
            tab_y_padding: 4,
            menu_bar_x_padding: 8,
            menu_bar_y_padding: 4,
            menu_x_padding: 10,
            menu_y_padding: 10,
            text_top_padding: 4,
            blink_period: 40,
            splitter_min_margin: 5,
            splitter_half_width: 2,
        }
    }
}

impl LayoutMetrics {
    #[must_use]
    pub fn with_main_font_size(mut self, size: i32) -> Self {
        self.main_font_size = size;
        self
    }

    #[must_use]
    pub fn with_code_font_size(mut self, size: i32) -> Self {
        self.code_font_size = size;
        self
    }

    #[must_use]
    pub fn with_menu_font_size(mut self, size: i32) -> Self {
        self.menu_font_size = size;
        self
    }

    /// Set the blink half-period. Zero is treated as one.
    #[must_use]
    pub fn with_blink_period(mut self, ticks: Tick) -> Self {
        self.blink_period = ticks.max(1);
        self
    }

    #[must_use]
    pub fn with_splitter_min_margin(mut self, px: i32) -> Self {
        self.splitter_min_margin = px.max(0);
        self
    }

    /// Height of a tab header row.
    #[must_use]
    pub const fn tab_height(&self) -> i32 {
        self.main_font_size + 2 * self.tab_y_padding
    }

    /// Height of the menu bar strip.
    #[must_use]
    pub const fn menu_bar_height(&self) -> i32 {
        self.menu_font_size + 2 * self.menu_bar_y_padding
    }

    /// Height of one editor row.
    #[must_use]
    pub const fn code_row_height(&self) -> i32 {
        self.code_font_size
    }
}
