//! Grid tests - construction, wrapped access and neighbor counting

use proptest::prelude::*;

use tui_life::core::{Grid, GridError, SimpleRng};
use tui_life::types::CellState;

#[test]
fn test_grid_new_all_dead() {
    let grid = Grid::new(4, 7).unwrap();
    assert_eq!(grid.dimensions(), (4, 7));
    assert_eq!(grid.alive_count(), 0);
    for r in 0..4 {
        for c in 0..7 {
            assert_eq!(grid.get(r, c), CellState::Dead);
        }
    }
}

#[test]
fn test_grid_rejects_zero_dimensions() {
    assert_eq!(
        Grid::new(0, 5),
        Err(GridError::InvalidDimensions { rows: 0, cols: 5 })
    );
    assert_eq!(
        Grid::new(5, 0),
        Err(GridError::InvalidDimensions { rows: 5, cols: 0 })
    );
    let mut rng = SimpleRng::new(1);
    assert!(Grid::random(0, 0, &mut rng).is_err());
}

#[test]
fn test_grid_one_by_one_is_valid() {
    let mut grid = Grid::new(1, 1).unwrap();
    grid.set(0, 0, CellState::Alive);
    // Every neighbor of the only cell is the cell itself.
    assert_eq!(grid.count_alive_neighbors(0, 0), 8);
}

#[test]
fn test_get_wraps_negative_and_overflowing_indices() {
    let mut grid = Grid::new(3, 4).unwrap();
    grid.set(2, 3, CellState::Alive);

    assert_eq!(grid.get(-1, -1), CellState::Alive);
    assert_eq!(grid.get(5, 7), CellState::Alive);
    assert_eq!(grid.get(-4, -5), CellState::Alive);
    assert_eq!(grid.get(2, 3), CellState::Alive);
    assert_eq!(grid.get(0, 0), CellState::Dead);
}

#[test]
fn test_set_wraps_indices() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set(-1, 3, CellState::Alive);
    assert_eq!(grid.get(2, 0), CellState::Alive);
    assert_eq!(grid.alive_count(), 1);
}

#[test]
fn test_corner_neighbors_wrap_around_torus() {
    let (n, m) = (5isize, 6isize);
    let mut grid = Grid::new(n as usize, m as usize).unwrap();
    let wrapped = [
        (n - 1, m - 1),
        (n - 1, 0),
        (n - 1, 1),
        (0, m - 1),
        (0, 1),
        (1, m - 1),
        (1, 0),
        (1, 1),
    ];

    for (i, &(r, c)) in wrapped.iter().enumerate() {
        grid.set(r, c, CellState::Alive);
        assert_eq!(grid.count_alive_neighbors(0, 0), (i + 1) as u8);
    }

    // The cell itself is not its own neighbor.
    grid.set(0, 0, CellState::Alive);
    assert_eq!(grid.count_alive_neighbors(0, 0), 8);
}

#[test]
fn test_neighbors_ignore_distant_cells() {
    let mut grid = Grid::new(10, 10).unwrap();
    grid.set(5, 5, CellState::Alive);
    assert_eq!(grid.count_alive_neighbors(0, 0), 0);
    assert_eq!(grid.count_alive_neighbors(4, 4), 1);
    assert_eq!(grid.count_alive_neighbors(5, 7), 0);
}

#[test]
fn test_neighbor_count_accepts_extreme_indices() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set(0, 0, CellState::Alive);

    let (n, m) = (3isize, 3isize);
    let (r, c) = (isize::MAX.rem_euclid(n), isize::MIN.rem_euclid(m));
    assert_eq!(
        grid.count_alive_neighbors(isize::MAX, isize::MIN),
        grid.count_alive_neighbors(r, c)
    );
    assert_eq!(
        grid.count_alive_neighbors(isize::MAX, 0),
        grid.count_alive_neighbors(r, 0)
    );
    assert_eq!(
        grid.count_alive_neighbors(isize::MIN, isize::MAX),
        grid.count_alive_neighbors(isize::MIN.rem_euclid(n), isize::MAX.rem_euclid(m))
    );
}

#[test]
fn test_from_rows_parses_pattern() {
    let grid = Grid::from_rows(&["*.O", "#..", "..."]).unwrap();
    assert_eq!(grid.dimensions(), (3, 3));
    assert_eq!(grid.alive_count(), 3);
    assert_eq!(grid.get(0, 2), CellState::Alive);
    assert_eq!(grid.get(1, 0), CellState::Alive);
}

#[test]
fn test_from_rows_rejects_ragged_and_empty() {
    assert_eq!(
        Grid::from_rows(&["...", ".."]),
        Err(GridError::RaggedRows {
            row: 1,
            expected: 3,
            found: 2
        })
    );
    assert_eq!(
        Grid::from_rows(&[]),
        Err(GridError::InvalidDimensions { rows: 0, cols: 0 })
    );
    assert_eq!(
        Grid::from_rows(&["", ""]),
        Err(GridError::InvalidDimensions { rows: 2, cols: 0 })
    );
}

#[test]
fn test_random_is_reproducible_and_mixed() {
    let a = Grid::random(30, 50, &mut SimpleRng::new(2024)).unwrap();
    let b = Grid::random(30, 50, &mut SimpleRng::new(2024)).unwrap();
    assert_eq!(a, b);

    let alive = a.alive_count();
    assert!(alive > 300 && alive < 1200, "alive = {}", alive);
}

#[test]
fn test_error_messages() {
    let err = Grid::new(0, 3).unwrap_err();
    assert!(err.to_string().contains("0x3"));
}

proptest! {
    #[test]
    fn prop_get_is_periodic(rows in 1usize..12, cols in 1usize..12, r in -50isize..50, c in -50isize..50, seed in any::<u32>()) {
        let grid = Grid::random(rows, cols, &mut SimpleRng::new(seed)).unwrap();
        let (n, m) = (rows as isize, cols as isize);
        prop_assert_eq!(grid.get(r, c), grid.get(r + n, c));
        prop_assert_eq!(grid.get(r, c), grid.get(r, c - m));
        prop_assert_eq!(grid.get(r, c), grid.get(r.rem_euclid(n), c.rem_euclid(m)));
    }

    #[test]
    fn prop_neighbor_count_matches_normalized_coordinates(rows in 1usize..10, cols in 1usize..10, r in any::<isize>(), c in any::<isize>(), seed in any::<u32>()) {
        let grid = Grid::random(rows, cols, &mut SimpleRng::new(seed)).unwrap();
        let (nr, nc) = (r.rem_euclid(rows as isize), c.rem_euclid(cols as isize));
        prop_assert_eq!(grid.count_alive_neighbors(r, c), grid.count_alive_neighbors(nr, nc));
    }

    #[test]
    fn prop_neighbor_count_in_range(rows in 1usize..10, cols in 1usize..10, seed in any::<u32>()) {
        let grid = Grid::random(rows, cols, &mut SimpleRng::new(seed)).unwrap();
        for r in 0..rows as isize {
            for c in 0..cols as isize {
                prop_assert!(grid.count_alive_neighbors(r, c) <= 8);
            }
        }
    }
}
