#![forbid(unsafe_code)]

//! Key shortcuts and static shortcut tables.
//!
//! A [`KeyShortcut`] is a modifier set plus a key. It renders as the label
//! shown next to menu entries ("Ctrl + S"). A [`ShortcutMap`] maps
//! shortcuts to actions and is meant to be built once, e.g. inside a
//! `LazyLock`, then only read.
//!
//! Lookup is exact: `Ctrl+Shift+A` does not match a binding for `Ctrl+A`.

use std::collections::HashMap;
use std::fmt;

use crate::event::{KeyCode, Modifiers};

/// A modifier set plus a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyShortcut {
    pub modifiers: Modifiers,
    pub code: KeyCode,
}

impl KeyShortcut {
    #[must_use]
    pub const fn new(modifiers: Modifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    /// A shortcut with no modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(Modifiers::NONE, code)
    }

    /// `Ctrl` + `code`.
    #[must_use]
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(Modifiers::CTRL, code)
    }
}

impl fmt::Display for KeyShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.modifiers, self.code)
    }
}

/// Maps exact shortcuts to actions.
#[derive(Debug, Clone)]
pub struct ShortcutMap<A> {
    bindings: HashMap<KeyShortcut, A>,
}

impl<A> Default for ShortcutMap<A> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<A> ShortcutMap<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding, replacing any action already bound to `shortcut`.
    #[must_use]
    pub fn bind(mut self, shortcut: KeyShortcut, action: A) -> Self {
        self.bindings.insert(shortcut, action);
        self
    }

    /// The action bound to exactly `modifiers` + `code`.
    #[must_use]
    pub fn lookup(&self, modifiers: Modifiers, code: KeyCode) -> Option<&A> {
        self.bindings.get(&KeyShortcut::new(modifiers, code))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<A> FromIterator<(KeyShortcut, A)> for ShortcutMap<A> {
    fn from_iter<I: IntoIterator<Item = (KeyShortcut, A)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Action {
        Save,
        LineEnd,
    }

    #[test]
    fn shortcut_label() {
        assert_eq!(KeyShortcut::ctrl(KeyCode::Char('s')).to_string(), "Ctrl + S");
        assert_eq!(KeyShortcut::plain(KeyCode::End).to_string(), "End");
        let saveas = KeyShortcut::new(Modifiers::CTRL | Modifiers::SHIFT, KeyCode::Char('s'));
        assert_eq!(saveas.to_string(), "Ctrl + Shift + S");
    }

    #[test]
    fn lookup_requires_exact_modifiers() {
        let map = ShortcutMap::new()
            .bind(KeyShortcut::ctrl(KeyCode::Char('s')), Action::Save)
            .bind(KeyShortcut::plain(KeyCode::End), Action::LineEnd);

        assert_eq!(
            map.lookup(Modifiers::CTRL, KeyCode::Char('s')),
            Some(&Action::Save)
        );
        assert_eq!(map.lookup(Modifiers::NONE, KeyCode::Char('s')), None);
        assert_eq!(
            map.lookup(Modifiers::CTRL | Modifiers::SHIFT, KeyCode::Char('s')),
            None
        );
        assert_eq!(map.lookup(Modifiers::SHIFT, KeyCode::End), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn later_binding_wins() {
        let map: ShortcutMap<Action> = [
            (KeyShortcut::plain(KeyCode::End), Action::Save),
            (KeyShortcut::plain(KeyCode::End), Action::LineEnd),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.lookup(Modifiers::NONE, KeyCode::End), Some(&Action::LineEnd));
        assert!(!map.is_empty());
    }
}
