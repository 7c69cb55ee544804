//! Grid module - the toroidal cell matrix
//!
//! The grid is an N x M matrix of cells stored as a flat, row-major array.
//! It has no edges: every coordinate is wrapped modulo the grid size, so
//! row `-1` is the last row and column `M` is column `0`.
//! Coordinates: (row, col) where row ranges 0..N (top to bottom), col ranges 0..M (left to right)

use std::fmt;

use thiserror::Error;

use crate::rng::SimpleRng;
use crate::types::{CellState, ALIVE_PROBABILITY_PERCENT};

/// Relative positions of the 8 neighbors of a cell, as (d_row, d_col)
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Errors raised while building a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Either dimension is zero (display too small for a 1x1 grid)
    #[error("invalid grid dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },

    /// A text pattern row differs in width from the first row
    #[error("pattern row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Toroidal Game of Life grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Dead; rows * cols],
        })
    }

    /// Create a grid where each cell is independently alive with
    /// `ALIVE_PROBABILITY_PERCENT` chance
    pub fn random(rows: usize, cols: usize, rng: &mut SimpleRng) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols)?;
        for cell in &mut grid.cells {
            if rng.chance(ALIVE_PROBABILITY_PERCENT) {
                *cell = CellState::Alive;
            }
        }
        Ok(grid)
    }

    /// Build a grid from text rows (`*`, `O`, `#` are alive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_core::Grid;
    ///
    /// let grid = Grid::from_rows(&["...", "***", "..."]).unwrap();
    /// assert_eq!(grid.dimensions(), (3, 3));
    /// assert_eq!(grid.alive_count(), 3);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let cols = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut grid = Self::new(rows.len(), cols)?;
        for (r, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::RaggedRows {
                    row: r,
                    expected: cols,
                    found,
                });
            }
            let start = r * cols;
            for (cell, ch) in grid.cells[start..start + cols].iter_mut().zip(line.chars()) {
                *cell = CellState::from_char(ch);
            }
        }
        Ok(grid)
    }

    /// Resolve a signed index onto `0..size`.
    ///
    /// Negative indices wrap the same way as positive overflow:
    /// `((index % size) + size) % size`.
    #[inline(always)]
    fn wrap(index: isize, size: usize) -> usize {
        index.rem_euclid(size as isize) as usize
    }

    #[inline(always)]
    fn index(&self, row: isize, col: isize) -> usize {
        Self::wrap(row, self.rows) * self.cols + Self::wrap(col, self.cols)
    }

    /// Grid size as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get cell at (row, col), wrapping both coordinates
    pub fn get(&self, row: isize, col: isize) -> CellState {
        self.cells[self.index(row, col)]
    }

    /// Set cell at (row, col), wrapping both coordinates
    pub fn set(&mut self, row: isize, col: isize, state: CellState) {
        let idx = self.index(row, col);
        self.cells[idx] = state;
    }

    /// Number of live cells among the 8 wrapped neighbors of (row, col)
    ///
    /// Coordinates are wrapped before the offsets are applied, so any `isize`
    /// (including `isize::MIN`/`isize::MAX`) is accepted.
    pub fn count_alive_neighbors(&self, row: isize, col: isize) -> u8 {
        let row = Self::wrap(row, self.rows) as isize;
        let col = Self::wrap(col, self.cols) as isize;
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| self.get(row + dr, col + dc).is_alive())
            .count() as u8
    }

    /// Total number of live cells
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of live cells in row-major order
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| (i / cols, i % cols))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}
