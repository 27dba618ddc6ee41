// grid.rs - Toroidal grid of binary cells

use std::fmt;
use thiserror::Error;

// Reference backdrop size
pub const DEFAULT_WIDTH: usize = 25;   // Columns
pub const DEFAULT_HEIGHT: usize = 15;  // Rows

const ALIVE_GLYPH: char = '#';
const DEAD_GLYPH: char = '.';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid picture has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("unexpected cell {glyph:?} at row {row}, column {col}")]
    BadCell { row: usize, col: usize, glyph: char },
}

/// Fixed-size grid of alive/dead cells, stored row-major.
///
/// Dimensions never change after construction. Edges wrap: `wrapped` treats
/// row `-1` as the last row and column `width` as the first column.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid.
    pub fn dead(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![false; width * height] }
    }

    /// Builds a grid by asking `cell(row, col)` for every position, row by row.
    pub fn from_fn(width: usize, height: usize, mut cell: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(cell(row, col));
            }
        }
        Self { width, height, cells }
    }

    /// Parses a picture such as `["....", ".##.", ".##.", "...."]`.
    /// `#` or `O` is alive, `.` is dead.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let first = rows.first().ok_or(GridError::Empty)?;
        let width = first.chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::Ragged { row, expected: width, found });
            }
            for (col, glyph) in line.chars().enumerate() {
                let alive = match glyph {
                    '#' | 'O' => true,
                    '.'       => false,
                    _ => return Err(GridError::BadCell { row, col, glyph }),
                };
                cells.push(alive);
            }
        }

        Ok(Self { width, height: rows.len(), cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// # Panics
    /// If `row` or `col` is out of range.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// # Panics
    /// If `row` or `col` is out of range.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let index = self.index(row, col);
        self.cells[index] = alive;
    }

    /// Cell lookup with wrap-around on both axes.
    pub fn wrapped(&self, row: isize, col: isize) -> bool {
        let r = row.rem_euclid(self.height as isize) as usize;
        let c = col.rem_euclid(self.width as isize) as usize;
        self.cells[r * self.width + c]
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// True when no cell is alive.
    pub fn is_dead(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    /// Iterates rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks(0) panics, and a zero-width grid has no cells to yield anyway
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        row * self.width + col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                write!(f, "{}", if alive { ALIVE_GLYPH } else { DEAD_GLYPH })?;
            }
        }
        Ok(())
    }
}
