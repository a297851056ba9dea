#![forbid(unsafe_code)]

//! Theme: a palette plus layout metrics.

use crate::metrics::LayoutMetrics;
use crate::palette::Palette;

/// Everything widgets need to know about appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    pub palette: Palette,
    pub metrics: LayoutMetrics,
}

impl Theme {
    /// Create a builder starting from the default theme.
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }
}

/// Builder for [`Theme`].
#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    /// Create a new builder starting from the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the palette.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.theme.palette = palette;
        self
    }

    /// Replace the layout metrics.
    pub fn metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.theme.metrics = metrics;
        self
    }

    /// Build the theme.
    pub fn build(self) -> Theme {
        self.theme
    }
}
