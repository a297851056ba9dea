#![forbid(unsafe_code)]

//! Core: geometry, per-frame input snapshots, key repeat, and shortcut tables.

pub mod event;
pub mod geometry;
pub mod input;
pub mod keybinding;
pub mod logging;

/// Logical frame counter. One tick elapses per update/draw cycle.
pub type Tick = u64;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
