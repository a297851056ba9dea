#![forbid(unsafe_code)]

//! Cursor blink phase.

use slate_core::Tick;

/// Whether a cursor last touched at `last` is drawn at tick `now`.
///
/// A square wave with `period` ticks on, then `period` ticks off, starting
/// solid-on at `last`. A zero period is treated as one tick.
#[must_use]
pub fn cursor_visible(now: Tick, last: Tick, period: Tick) -> bool {
    let period = period.max(1);
    (now.saturating_sub(last) / period) % 2 == 0
}
