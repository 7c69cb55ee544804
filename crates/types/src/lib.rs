//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Screen Layout
//!
//! The playable field is the terminal area minus a fixed frame:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BORDER_ROWS` | 3 | Top border, bottom border and the status line |
//! | `BORDER_COLS` | 2 | Left and right border |
//! | `BORDER_OFFSET` | 1 | Offset from grid coordinates to screen coordinates |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{CellState, Key};
//!
//! assert!(CellState::Alive.is_alive());
//! assert_eq!(CellState::from_char('*'), CellState::Alive);
//! assert_eq!(CellState::Dead.as_char(), '.');
//!
//! assert!(Key::Char('Q').is_quit());
//! assert!(!Key::Char(' ').is_quit());
//! ```

/// Rows reserved around the grid (top border, bottom border, status line)
pub const BORDER_ROWS: u16 = 3;

/// Columns reserved around the grid (left and right border)
pub const BORDER_COLS: u16 = 2;

/// Offset applied to grid coordinates when drawing inside the border
pub const BORDER_OFFSET: u16 = 1;

/// Chance, in percent, that a cell starts alive when the grid is seeded
pub const ALIVE_PROBABILITY_PERCENT: u32 = 50;

/// Glyph drawn for a live cell
pub const ALIVE_GLYPH: char = '*';

/// Hint shown right-aligned on the status line
pub const STATUS_HINT: &str = "Press any key to continue, Q to quit";


/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Parse a pattern character: `*`, `O` and `#` are alive, anything else is dead
    pub fn from_char(ch: char) -> Self {
        match ch {
            '*' | 'O' | '#' => CellState::Alive,
            _ => CellState::Dead,
        }
    }

    /// Text form used by `Display` impls and pattern dumps
    pub fn as_char(self) -> char {
        match self {
            CellState::Alive => ALIVE_GLYPH,
            CellState::Dead => '.',
        }
    }
}

/// A single keypress, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character
    Char(char),
    /// Ctrl-C (raw mode delivers it as a key, not a signal)
    Interrupt,
    /// Any other key (arrows, function keys, Enter, ...)
    Other,
}

impl Key {
    /// Check if the key ends the simulation (case-insensitive `Q`, or Ctrl-C)
    pub fn is_quit(self) -> bool {
        match self {
            Key::Char(c) => c.eq_ignore_ascii_case(&'q'),
            Key::Interrupt => true,
            Key::Other => false,
        }
    }
}

/// Semantic color role for a drawn character
///
/// Surfaces decide the concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Border,
    Cell,
    Text,
}
