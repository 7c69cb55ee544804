//! Engine module - drives the simulation against a display surface.
//!
//! The controller only knows the [`Surface`] capability set (clear, draw,
//! refresh, query size, read one key), so it runs the same against a real
//! terminal or a scripted test double.

pub mod config;
pub mod controller;
pub mod surface;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use config::{LifeConfig, SeedSource};
pub use controller::{Controller, Phase};
pub use surface::Surface;
