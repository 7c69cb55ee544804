//! Terminal rendering module.
//!
//! A small rendering layer for terminal play. It avoids ratatui widgets and
//! instead renders into a simple framebuffer that is diffed and flushed to a
//! crossterm backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Only write the cells that changed between generations
//! - Implement the engine's [`engine::Surface`] so the controller never
//!   touches crossterm directly

pub mod fb;
pub mod renderer;
pub mod surface;

pub use tui_life_engine as engine;
pub use tui_life_input as input;
pub use tui_life_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::TerminalSurface;
