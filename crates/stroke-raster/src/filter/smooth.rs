//! Zero-padded 2-D convolution with a Gaussian kernel.

use crate::grid::Grid;

use super::kernel::GaussianKernel;

/// Convolve `grid` with `kernel`, producing a grid of the same size.
///
/// Cells outside the grid contribute 0 (zero padding), so intensity near
/// the border leaks out of the grid. Because the kernel is symmetric,
/// correlation and convolution coincide.
///
/// Output may overshoot `[0, 1]` by floating point noise; the caller clamps.
pub fn smooth(grid: &Grid, kernel: &GaussianKernel) -> Grid {
    let n = grid.size() as isize;
    let k = kernel.size();
    let r = kernel.radius() as isize;
    let mut out = Grid::new(grid.size());

    for row in 0..n {
        for col in 0..n {
            let mut acc = 0.0f32;
            for i in 0..k {
                let sr = row + i as isize - r;
                if sr < 0 || sr >= n {
                    continue;
                }
                for j in 0..k {
                    let sc = col + j as isize - r;
                    if sc < 0 || sc >= n {
                        continue;
                    }
                    acc += kernel.weight(i, j) * grid.get(sr as usize, sc as usize);
                }
            }
            out.set(row as usize, col as usize, acc);
        }
    }
    out
}
