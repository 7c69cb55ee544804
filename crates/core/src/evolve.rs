//! Evolution module - Conway's B3/S23 rule
//!
//! `evolve` is a pure function: it reads one immutable grid and builds a
//! fresh one, so every neighbor count in a pass sees the same generation.

use crate::grid::Grid;
use crate::types::CellState;

/// Next state of one cell given its live-neighbor count
///
/// A live cell survives with 2 or 3 neighbors; a dead cell is born with exactly 3.
pub fn next_state(current: CellState, alive_neighbors: u8) -> CellState {
    match (current, alive_neighbors) {
        (CellState::Alive, 2 | 3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

/// Compute the next generation
///
/// # Examples
///
/// ```
/// use tui_life_core::{evolve, Grid};
///
/// let blinker = Grid::from_rows(&[".....", ".....", ".***.", ".....", "....."]).unwrap();
/// let next = evolve(&blinker);
/// assert_eq!(next.to_string(), ".....\n..*..\n..*..\n..*..\n.....");
/// assert_eq!(evolve(&next), blinker);
/// ```
pub fn evolve(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let mut next = grid.clone();
    for row in 0..rows as isize {
        for col in 0..cols as isize {
            let k = grid.count_alive_neighbors(row, col);
            next.set(row, col, next_state(grid.get(row, col), k));
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survival_rule() {
        for k in 0..=8u8 {
            let expected = if k == 2 || k == 3 {
                CellState::Alive
            } else {
                CellState::Dead
            };
            assert_eq!(next_state(CellState::Alive, k), expected, "k = {}", k);
        }
    }

    #[test]
    fn test_birth_rule() {
        for k in 0..=8u8 {
            let expected = if k == 3 {
                CellState::Alive
            } else {
                CellState::Dead
            };
            assert_eq!(next_state(CellState::Dead, k), expected, "k = {}", k);
        }
    }

    #[test]
    fn test_evolve_does_not_touch_input() {
        let grid = Grid::from_rows(&["***", "...", "..."]).unwrap();
        let before = grid.clone();
        let _ = evolve(&grid);
        assert_eq!(grid, before);
    }
}
