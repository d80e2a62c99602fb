use crossterm::event::KeyEvent;

use super::keymap::{self, KeymapContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyAction {
    Quit,
    BeginEdit,
    Confirm,
    Cancel,
    Dismiss,
    FieldStep(i32),
    Input(KeyEvent),
}

/// Resolves a key press against the keymap; unbound keys go to the field.
pub(crate) fn classify(key: &KeyEvent, context: KeymapContext) -> KeyAction {
    keymap::classify_key(key, context).unwrap_or(KeyAction::Input(*key))
}
