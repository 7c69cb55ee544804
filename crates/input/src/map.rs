//! Key mapping from terminal events to simulation keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a keyboard event to a [`Key`].
pub fn map_key_event(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Key::Interrupt
        }
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

/// Only presses count as keystrokes; release and auto-repeat events are ignored.
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}
