#![forbid(unsafe_code)]

//! Palette, layout metrics, and the [`Theme`] that bundles them.
//!
//! # Example
//! ```
//! use slate_style::{LayoutMetrics, Palette, Theme};
//!
//! let theme = Theme::builder()
//!     .metrics(LayoutMetrics::default().with_code_font_size(16))
//!     .build();
//! assert_eq!(theme.metrics.code_font_size, 16);
//! assert_eq!(theme.palette, Palette::gruvbox());
//! ```

pub mod metrics;
pub mod palette;
pub mod theme;

pub use metrics::LayoutMetrics;
pub use palette::{Palette, UNKNOWN_COLOR};
pub use theme::{Theme, ThemeBuilder};
