//! Terminal input module.
//!
//! Maps `crossterm` key events into backend-independent [`types::Key`]
//! values so the controller never sees terminal-specific types.

pub mod map;

pub use tui_life_types as types;

pub use map::{is_press, map_key_event};
