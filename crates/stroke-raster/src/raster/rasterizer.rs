//! Stroke rasterization: mark sampled cells and bridge the gaps between them.

use crate::geometry::GridCell;
use crate::grid::Grid;

use super::line::bresenham;

/// Rasterize one ordered stroke onto a fresh `grid_size` grid.
///
/// Every cell is set to 1.0, and each temporally consecutive pair is joined
/// by a [`bresenham`] segment so the stroke is continuous. The result is a
/// union of filled cells, not an accumulation, so segment order and repeated
/// cells do not matter. Cells outside the grid are dropped.
///
/// Zero cells give a blank grid; a single cell marks just that cell.
pub fn rasterize(cells: &[GridCell], grid_size: usize) -> Grid {
    let mut grid = Grid::new(grid_size);
    draw_stroke(&mut grid, cells);
    grid
}

/// Rasterize several independent strokes onto one grid.
///
/// Segments are drawn within each stroke only; the pen-up gap between the
/// end of one stroke and the start of the next stays empty.
pub fn rasterize_strokes(strokes: &[Vec<GridCell>], grid_size: usize) -> Grid {
    let mut grid = Grid::new(grid_size);
    for stroke in strokes {
        draw_stroke(&mut grid, stroke);
    }
    grid
}

fn draw_stroke(grid: &mut Grid, cells: &[GridCell]) {
    for &cell in cells {
        grid.mark(cell);
    }
    for pair in cells.windows(2) {
        for cell in bresenham(pair[0], pair[1]) {
            grid.mark(cell);
        }
    }
}
