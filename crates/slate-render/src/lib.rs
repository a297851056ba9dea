#![forbid(unsafe_code)]

//! Render kernel: colours, the abstract drawing surface, and font metrics.
//!
//! Nothing here talks to a real graphics backend. Widgets draw into a
//! [`RenderSink`]; a windowing layer implements it on top of whatever it
//! uses, and tests use the recording [`DrawList`].

pub mod color;
pub mod draw_list;
pub mod font;
pub mod sink;
pub mod text_layer;

pub use color::PackedRgba;
pub use draw_list::{DrawCommand, DrawList};
pub use font::{FontMetrics, FontRole, LineMetrics, MonoFace, MonospaceMetrics};
pub use sink::{DrawExt, RenderSink};
pub use text_layer::{GlyphRun, TextLayer};
