//! Intensity-weighted center of mass.

use crate::grid::Grid;

/// Center of mass of a grid, in fractional `(row, col)` cell units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    /// Row coordinate.
    pub cy: f64,
    /// Column coordinate.
    pub cx: f64,
}

/// Geometric center of a grid, `(size / 2, size / 2)` with integer division.
///
/// This is the recentering target and the centroid of a blank grid.
#[inline]
pub fn grid_center(size: usize) -> Centroid {
    let c = (size / 2) as f64;
    Centroid { cy: c, cx: c }
}

/// Compute the intensity-weighted centroid.
///
/// A blank grid (total mass 0) is defined to be already centered and
/// returns [`grid_center`], avoiding a division by zero.
///
/// # Example
///
/// ```
/// use stroke_raster::{centroid, Grid};
///
/// let mut grid = Grid::new(28);
/// grid.set(3, 20, 1.0);
/// let c = centroid(&grid);
/// assert_eq!((c.cy, c.cx), (3.0, 20.0));
///
/// let empty = centroid(&Grid::new(28));
/// assert_eq!((empty.cy, empty.cx), (14.0, 14.0));
/// ```
pub fn centroid(grid: &Grid) -> Centroid {
    let n = grid.size();
    let mut total = 0.0f64;
    let mut row_moment = 0.0f64;
    let mut col_moment = 0.0f64;

    for (r, row) in grid.rows().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            let v = v as f64;
            total += v;
            row_moment += v * r as f64;
            col_moment += v * c as f64;
        }
    }

    if total == 0.0 {
        return grid_center(n);
    }
    Centroid {
        cy: row_moment / total,
        cx: col_moment / total,
    }
}
