#![forbid(unsafe_code)]

//! Per-frame input snapshots and key repeat.
//!
//! The backend polls its devices once per tick and hands the result to the
//! frame loop as a [`FrameInput`]. Held keys carry how many ticks they have
//! been down, which is all [`RepeatPolicy`] needs to decide whether a key
//! "fires" this frame.
//!
//! # Example
//! ```
//! use slate_core::event::KeyCode;
//! use slate_core::input::{KeyTracker, RepeatPolicy};
//!
//! let policy = RepeatPolicy::default();
//! let mut keys = KeyTracker::new();
//! keys.press(KeyCode::Backspace);
//!
//! let mut fired = 0;
//! for _ in 0..30 {
//!     keys.begin_frame();
//!     if keys.held().iter().any(|k| policy.fires(k.ticks)) {
//!         fired += 1;
//!     }
//! }
//! // Press frame, first repeat at tick 20, then ticks 23, 26, 29.
//! assert_eq!(fired, 5);
//! ```

use std::collections::BTreeMap;

use crate::Tick;
use crate::event::{KeyCode, Modifiers};
use crate::geometry::Point;

/// When a held key counts as pressed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatPolicy {
    /// Hold duration (in ticks) of the first repeat.
    pub initial_delay: Tick,
    /// Ticks between later repeats.
    pub interval: Tick,
}

impl Default for RepeatPolicy {
    fn default() -> Self {
        Self {
            initial_delay: 20,
            interval: 3,
        }
    }
}

impl RepeatPolicy {
    /// Set the hold duration of the first repeat.
    #[must_use]
    pub fn with_initial_delay(mut self, ticks: Tick) -> Self {
        self.initial_delay = ticks.max(1);
        self
    }

    /// Set the repeat interval. Zero is treated as one.
    #[must_use]
    pub fn with_interval(mut self, ticks: Tick) -> Self {
        self.interval = ticks.max(1);
        self
    }

    /// Whether a key held for `ticks` ticks fires this frame.
    ///
    /// `ticks == 1` is the frame the key went down.
    #[must_use]
    pub fn fires(&self, ticks: Tick) -> bool {
        if ticks == 1 {
            return true;
        }
        let interval = self.interval.max(1);
        ticks >= self.initial_delay && (ticks - self.initial_delay) % interval == 0
    }
}

/// A key that is down this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeldKey {
    pub code: KeyCode,
    /// Ticks held, counting the current frame (1 on the press frame).
    pub ticks: Tick,
}

/// Tracks hold durations from raw key down/up notifications.
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    held: BTreeMap<KeyCode, Tick>,
}

impl KeyTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down. Repeated downs while held are ignored.
    pub fn press(&mut self, code: KeyCode) {
        self.held.entry(code).or_insert(0);
    }

    /// Record a key going up.
    pub fn release(&mut self, code: KeyCode) {
        self.held.remove(&code);
    }

    /// Release every key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Advance every hold duration by one tick.
    pub fn begin_frame(&mut self) {
        for ticks in self.held.values_mut() {
            *ticks = ticks.saturating_add(1);
        }
    }

    /// Keys currently down, in key order.
    #[must_use]
    pub fn held(&self) -> Vec<HeldKey> {
        self.held
            .iter()
            .filter(|(_, ticks)| **ticks > 0)
            .map(|(&code, &ticks)| HeldKey { code, ticks })
            .collect()
    }
}

/// Everything the frame loop needs to know about input for one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Pointer position in screen pixels.
    pub pointer: Point,
    /// The primary button went down this frame.
    pub left_pressed: bool,
    /// The primary button went up this frame.
    pub left_released: bool,
    /// Modifier keys currently held.
    pub modifiers: Modifiers,
    /// Non-modifier keys currently held.
    pub held_keys: Vec<HeldKey>,
    /// Characters typed this frame, in order.
    pub typed: String,
}

impl FrameInput {
    /// Input with the pointer at `(x, y)` and nothing else happening.
    #[must_use]
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            pointer: Point::new(x, y),
            ..Self::default()
        }
    }

    /// Mark a primary-button press edge.
    #[must_use]
    pub fn press_left(mut self) -> Self {
        self.left_pressed = true;
        self
    }

    /// Mark a primary-button release edge.
    #[must_use]
    pub fn release_left(mut self) -> Self {
        self.left_released = true;
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Add a held key with its hold duration.
    #[must_use]
    pub fn hold(mut self, code: KeyCode, ticks: Tick) -> Self {
        self.held_keys.push(HeldKey { code, ticks });
        self
    }

    /// Add a key that went down this frame.
    #[must_use]
    pub fn tap(self, code: KeyCode) -> Self {
        self.hold(code, 1)
    }

    /// Append typed characters.
    #[must_use]
    pub fn typed(mut self, text: &str) -> Self {
        self.typed.push_str(text);
        self
    }

    /// Keys that were just pressed or are repeating this frame.
    pub fn triggered_keys<'a>(
        &'a self,
        policy: &'a RepeatPolicy,
    ) -> impl Iterator<Item = KeyCode> + 'a {
        self.held_keys
            .iter()
            .filter(|key| policy.fires(key.ticks))
            .map(|key| key.code)
    }

    /// Whether `code` is down at all.
    #[must_use]
    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held_keys.iter().any(|key| key.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_repeats_after_delay_then_every_third_tick() {
        let policy = RepeatPolicy::default();
        let fired: Vec<Tick> = (1..=30).filter(|&t| policy.fires(t)).collect();
        assert_eq!(fired, vec![1, 20, 23, 26, 29]);
    }

    #[test]
    fn zero_interval_is_treated_as_one() {
        let policy = RepeatPolicy::default()
            .with_initial_delay(2)
            .with_interval(0);
        assert!(policy.fires(2));
        assert!(policy.fires(3));
        assert!(policy.fires(4));
    }

    #[test]
    fn tracker_counts_hold_duration() {
        let mut keys = KeyTracker::new();
        keys.press(KeyCode::Left);
        assert!(keys.held().is_empty(), "not visible until the frame begins");

        keys.begin_frame();
        assert_eq!(
            keys.held(),
            vec![HeldKey {
                code: KeyCode::Left,
                ticks: 1
            }]
        );

        keys.press(KeyCode::Left);
        keys.begin_frame();
        assert_eq!(keys.held()[0].ticks, 2, "re-press while held is ignored");

        keys.release(KeyCode::Left);
        keys.begin_frame();
        assert!(keys.held().is_empty());
    }

    #[test]
    fn triggered_keys_filters_by_policy() {
        let policy = RepeatPolicy::default();
        let input = FrameInput::at(0, 0)
            .tap(KeyCode::Enter)
            .hold(KeyCode::Backspace, 5)
            .hold(KeyCode::Left, 20);
        let keys: Vec<KeyCode> = input.triggered_keys(&policy).collect();
        assert_eq!(keys, vec![KeyCode::Enter, KeyCode::Left]);
        assert!(input.is_held(KeyCode::Backspace));
    }
}
