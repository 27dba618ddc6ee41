// render.rs - Paints a grid onto a canvas

use crate::canvas::{Canvas, Rect, Segment};
use crate::grid::Grid;
use crate::theme::Palette;

/// Logical surface size for `grid` at `cell_size` units per cell.
pub fn canvas_size(grid: &Grid, cell_size: u32) -> (f32, f32) {
    let cell = cell_size as f32;
    (grid.width() as f32 * cell, grid.height() as f32 * cell)
}

/// Draws one full frame: background, live cells, grid lines, border.
///
/// Every pixel of the surface is overwritten, so drawing the same grid and
/// palette twice leaves the surface unchanged.
pub fn render<C: Canvas + ?Sized>(grid: &Grid, palette: &Palette, cell_size: u32, canvas: &mut C) {
    let cell = cell_size as f32;
    let (width, height) = canvas_size(grid, cell_size);
    let bounds = Rect::new(0.0, 0.0, width, height);

    canvas.clear_rect(bounds, palette.dead);

    for (row, cells) in grid.rows().enumerate() {
        for (col, &alive) in cells.iter().enumerate() {
            if alive {
                let rect = Rect::new(col as f32 * cell, row as f32 * cell, cell, cell);
                canvas.fill_rect(rect, palette.live);
            }
        }
    }

    let mut lines = Vec::with_capacity(grid.width() + grid.height() + 2);
    for col in 0..=grid.width() {
        let x = col as f32 * cell;
        lines.push(Segment::new((x, 0.0), (x, height)));
    }
    for row in 0..=grid.height() {
        let y = row as f32 * cell;
        lines.push(Segment::new((0.0, y), (width, y)));
    }
    canvas.stroke_path(&lines, palette.grid_line);

    canvas.stroke_rect(bounds, palette.border);
}
