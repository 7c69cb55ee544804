//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the Game of Life rules and grid storage.
//! It has **zero dependencies** on terminals, input, or I/O, making it:
//!
//! - **Deterministic**: the same grid always evolves into the same grid, and
//!   the same seed always produces the same starting grid
//! - **Testable**: every rule and topology edge case is covered by unit tests
//! - **Portable**: can run headless, under a terminal, or in a benchmark
//!
//! # Module Structure
//!
//! - [`grid`]: N x M toroidal grid with wrapped reads/writes and neighbor counts
//! - [`evolve`]: B3/S23 generation step
//! - [`rng`]: LCG used for reproducible random seeding
//!
//! # Rules
//!
//! - **Topology**: the grid is a torus; edges wrap to the opposite side
//! - **Survival**: a live cell with 2 or 3 live neighbors stays alive
//! - **Birth**: a dead cell with exactly 3 live neighbors becomes alive
//! - **Death**: every other cell is dead in the next generation
//!
//! # Example
//!
//! ```
//! use tui_life_core::{evolve, Grid, SimpleRng};
//!
//! let mut rng = SimpleRng::new(12345);
//! let grid = Grid::random(20, 40, &mut rng).unwrap();
//!
//! let next = evolve(&grid);
//! assert_eq!(next.dimensions(), grid.dimensions());
//! ```

pub mod evolve;
pub mod grid;
pub mod rng;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use evolve::{evolve, next_state};
pub use grid::{Grid, GridError};
pub use rng::SimpleRng;
