#![forbid(unsafe_code)]

//! Frame loop and event routing for the slate shell.
//!
//! # Role in slate
//! `slate-runtime` owns the per-frame cycle. A [`Shell`] holds the widget
//! tree, advances the tick counter, applies text posted from other threads,
//! and hands each frame's input to the [`EventRouter`], which decides who
//! is hovered, who holds keyboard focus, and who gets the keys.
//!
//! # How it fits in the system
//! The host window loop turns raw events into a
//! [`FrameInput`](slate_core::input::FrameInput) per frame, calls
//! [`Shell::update`], then [`Shell::draw`] into its backend's
//! [`RenderSink`](slate_render::RenderSink). Producers on other threads
//! only ever talk to the shell through a [`TextPoster`].

pub mod layout;
pub mod mailbox;
pub mod router;
pub mod shell;
#[cfg(feature = "subscriber")]
pub mod telemetry;
pub mod ticker;

pub use layout::{DefaultLayout, default_layout};
pub use mailbox::TextPoster;
pub use router::{EventRouter, FrameReport};
pub use shell::{Shell, ShellConfig, ShellError};
pub use ticker::StatusTicker;
