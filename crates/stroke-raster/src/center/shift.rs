//! Circular (wrap-around) translation and mass recentering.

use tracing::debug;

use crate::grid::Grid;

use super::centroid::{centroid, grid_center};

/// Roll the grid by `shift_y` rows, then by `shift_x` columns.
///
/// Content leaving one edge re-enters at the opposite edge, so the result
/// is a permutation of the input cells: nothing is clipped or created.
/// Positive shifts move content down / right.
pub fn shift(grid: &Grid, shift_y: i64, shift_x: i64) -> Grid {
    let n = grid.size();
    if n == 0 {
        return grid.clone();
    }
    let sy = shift_y.rem_euclid(n as i64) as usize;
    let sx = shift_x.rem_euclid(n as i64) as usize;

    let mut rows_rolled = Grid::new(n);
    for r in 0..n {
        let dst = (r + sy) % n;
        for c in 0..n {
            rows_rolled.set(dst, c, grid.get(r, c));
        }
    }

    let mut out = Grid::new(n);
    for r in 0..n {
        for c in 0..n {
            out.set(r, (c + sx) % n, rows_rolled.get(r, c));
        }
    }
    out
}

/// Integer `(shift_y, shift_x)` that moves the centroid onto the grid center.
///
/// Each component is `round(target - centroid)` with ties rounded to even,
/// matching the rounding of the numeric stack the classifier was trained
/// with.
pub fn centering_offsets(grid: &Grid) -> (i64, i64) {
    let c = centroid(grid);
    let target = grid_center(grid.size());
    (
        (target.cy - c.cy).round_ties_even() as i64,
        (target.cx - c.cx).round_ties_even() as i64,
    )
}

/// Recenter the grid's mass on its geometric center with a circular shift.
///
/// Strokes hugging one border may wrap to the opposite side when the
/// required shift is large. That artifact is accepted: the classifier is
/// calibrated on this exact behavior, so do not replace it with a
/// crop-and-pad.
pub fn center(grid: &Grid) -> Grid {
    let (shift_y, shift_x) = centering_offsets(grid);
    debug!(shift_y, shift_x, "recentering grid");
    if shift_y == 0 && shift_x == 0 {
        return grid.clone();
    }
    shift(grid, shift_y, shift_x)
}
