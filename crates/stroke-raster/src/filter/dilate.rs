//! Grey-level dilation (local maximum) for stroke thickening.

use crate::grid::Grid;

/// Replace each cell with the maximum over its `kernel_size x kernel_size`
/// neighborhood.
///
/// Out-of-bounds neighbors count as 0 ("same" padding); since intensities
/// are non-negative this is the same as ignoring them. A single-cell stroke
/// becomes `kernel_size` cells wide.
///
/// Dilation can close small enclosed holes (the loop of a 6, 8, 9 or 0),
/// which is why the preprocessor leaves it off by default.
///
/// `kernel_size` must be odd; the preprocessor validates this before
/// calling. The input grid is not modified.
pub fn dilate(grid: &Grid, kernel_size: usize) -> Grid {
    let n = grid.size();
    let r = kernel_size / 2;
    let mut out = Grid::new(n);

    for row in 0..n {
        for col in 0..n {
            let mut max_val = 0.0f32;
            for nr in row.saturating_sub(r)..=(row + r).min(n - 1) {
                for nc in col.saturating_sub(r)..=(col + r).min(n - 1) {
                    let v = grid.get(nr, nc);
                    if v > max_val {
                        max_val = v;
                    }
                }
            }
            out.set(row, col, max_val);
        }
    }
    out
}
