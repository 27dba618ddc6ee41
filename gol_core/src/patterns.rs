// patterns.rs - Well-known Life patterns for tests, as offsets from their top-left corner

use crate::grid::Grid;

pub struct Pattern {
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const GLIDER: Pattern = Pattern {
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

/// Sets the pattern's cells alive with its corner at (`row`, `col`), wrapping
/// at the edges. Other cells are left as they are.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern, row: usize, col: usize) {
    if grid.width() == 0 || grid.height() == 0 {
        return;
    }
    for &(dr, dc) in pattern.cells {
        grid.set((row + dr) % grid.height(), (col + dc) % grid.width(), true);
    }
}

/// A fresh dead grid holding only `pattern`.
pub fn placed(pattern: &Pattern, width: usize, height: usize, row: usize, col: usize) -> Grid {
    let mut grid = Grid::dead(width, height);
    apply_pattern(&mut grid, pattern, row, col);
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_wraps_past_the_edge() {
        let grid = placed(&BLOCK, 5, 5, 4, 4);
        assert_eq!(grid.live_count(), 4);
        assert!(grid.get(4, 4));
        assert!(grid.get(0, 0));
        assert!(grid.get(4, 0));
        assert!(grid.get(0, 4));
    }

    #[test]
    fn apply_keeps_existing_cells() {
        let mut grid = Grid::dead(10, 10);
        grid.set(9, 9, true);
        apply_pattern(&mut grid, &BLINKER, 0, 0);
        assert_eq!(grid.live_count(), 4);
    }

    #[test]
    fn zero_sized_grid_is_left_alone() {
        let mut grid = Grid::dead(0, 0);
        apply_pattern(&mut grid, &GLIDER, 3, 3);
        assert!(grid.is_dead());
    }
}
