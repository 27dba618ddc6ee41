// rules.rs - Conway's B3/S23 transition on a torus

use crate::grid::Grid;

/// 3x3 Moore neighbourhood without the centre, as (row, col) offsets.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Counts live neighbours with wrap-around lookup.
///
/// On grids narrower than three cells an axis wraps onto itself, so the same
/// cell may be counted for more than one offset.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (row, col) = (row as isize, col as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| grid.wrapped(row + dr, col + dc))
        .count() as u8
}

/// Next state of one cell given its live-neighbour count.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Computes the next generation into a fresh grid. `grid` is left untouched.
pub fn step(grid: &Grid) -> Grid {
    Grid::from_fn(grid.width(), grid.height(), |row, col| {
        next_state(grid.get(row, col), live_neighbors(grid, row, col))
    })
}
