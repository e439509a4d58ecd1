//! Integer line traversal between two grid cells.

use crate::geometry::GridCell;

/// Bresenham line from `from` to `to`, both endpoints included.
///
/// Uses the symmetric error-term formulation, so all eight octants (steep
/// or shallow, any direction) are handled by the same loop. Consecutive
/// cells are always 8-connected: each step moves by exactly one in row,
/// column, or both. Identical endpoints produce a single cell.
///
/// ```text
///   from                       to
///    X X X
///          X X X
///                X X X X
/// ```
///
/// # Example
///
/// ```
/// use stroke_raster::{bresenham, GridCell};
///
/// let line = bresenham(GridCell::new(0, 0), GridCell::new(2, 4));
/// assert_eq!(line.first(), Some(&GridCell::new(0, 0)));
/// assert_eq!(line.last(), Some(&GridCell::new(2, 4)));
/// assert_eq!(line.len(), 5);
/// ```
pub fn bresenham(from: GridCell, to: GridCell) -> Vec<GridCell> {
    let (mut x, mut y) = (from.col as isize, from.row as isize);
    let (x1, y1) = (to.col as isize, to.row as isize);

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut cells = Vec::with_capacity(dx.max(-dy) as usize + 1);
    loop {
        cells.push(GridCell::new(y as usize, x as usize));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}
