//! The square intensity raster threaded through the pipeline.

use crate::geometry::GridCell;

/// A dense `size x size` raster of `f32` intensities in row-major order.
///
/// Every pipeline stage takes a `&Grid` (or owns one) and hands back a new
/// `Grid` of the same size. Values are in `[0, 1]` at every observable
/// boundary; intermediate stages such as smoothing may overshoot slightly
/// and [`Grid::clamped`] pulls them back.
///
/// # Example
///
/// ```
/// use stroke_raster::Grid;
///
/// let mut grid = Grid::new(4);
/// grid.set(1, 2, 1.0);
///
/// assert_eq!(grid.size(), 4);
/// assert_eq!(grid.get(1, 2), 1.0);
/// assert_eq!(grid.sum(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    values: Vec<f32>,
}

impl Grid {
    /// Create an all-zero grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Build a grid from row-major values.
    ///
    /// Returns `None` if `values.len() != size * size`.
    pub fn from_values(size: usize, values: Vec<f32>) -> Option<Self> {
        if values.len() != size * size {
            return None;
        }
        Some(Self { size, values })
    }

    /// Side length in cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.values[row * self.size + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.values[row * self.size + col] = value;
    }

    /// Write 1.0 at `cell`, silently ignoring cells outside the grid.
    #[inline]
    pub fn mark(&mut self, cell: GridCell) {
        if cell.row < self.size && cell.col < self.size {
            self.set(cell.row, cell.col, 1.0);
        }
    }

    /// Row-major view of all cells.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f32> {
        self.values
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        // chunks() panics on 0, and a 0-sized grid has no rows anyway
        self.values.chunks(self.size.max(1))
    }

    /// Total intensity ("mass") of the grid.
    pub fn sum(&self) -> f64 {
        self.values.iter().map(|&v| v as f64).sum()
    }

    /// Largest cell value, or 0.0 for an empty grid.
    pub fn max(&self) -> f32 {
        self.values.iter().copied().fold(0.0, f32::max)
    }

    /// True when no cell carries any intensity.
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    /// Number of cells with non-zero intensity.
    pub fn count_nonzero(&self) -> usize {
        self.values.iter().filter(|&&v| v != 0.0).count()
    }

    /// Copy with every cell clipped into `[0, 1]`.
    ///
    /// NaN cells become 0.0 so the result always satisfies the range
    /// guarantee.
    pub fn clamped(&self) -> Grid {
        let values = self
            .values
            .iter()
            .map(|&v| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) })
            .collect();
        Grid {
            size: self.size,
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_blank() {
        let grid = Grid::new(28);
        assert_eq!(grid.values().len(), 28 * 28);
        assert!(grid.is_blank());
        assert_eq!(grid.sum(), 0.0);
        assert_eq!(grid.max(), 0.0);
    }

    #[test]
    fn test_from_values_rejects_wrong_length() {
        assert!(Grid::from_values(3, vec![0.0; 8]).is_none());
        assert!(Grid::from_values(3, vec![0.0; 9]).is_some());
    }

    #[test]
    fn test_mark_ignores_out_of_bounds() {
        let mut grid = Grid::new(4);
        grid.mark(GridCell::new(4, 0));
        grid.mark(GridCell::new(0, 17));
        assert!(grid.is_blank());

        grid.mark(GridCell::new(3, 3));
        assert_eq!(grid.get(3, 3), 1.0);
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut grid = Grid::new(4);
        grid.mark(GridCell::new(2, 1));
        grid.mark(GridCell::new(2, 1));
        assert_eq!(grid.get(2, 1), 1.0);
        assert_eq!(grid.sum(), 1.0);
    }

    #[test]
    fn test_rows_are_row_major() {
        let grid = Grid::from_values(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let rows: Vec<&[f32]> = grid.rows().collect();
        assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);
        assert_eq!(grid.get(1, 0), 3.0);
    }

    #[test]
    fn test_clamped_clips_overshoot_and_nan() {
        let grid = Grid::from_values(2, vec![-0.2, 0.5, 1.0000001, f32::NAN]).unwrap();
        let clamped = grid.clamped();
        assert_eq!(clamped.values(), &[0.0, 0.5, 1.0, 0.0]);
    }

    #[test]
    fn test_count_nonzero() {
        let grid = Grid::from_values(2, vec![0.0, 0.1, 0.0, 1.0]).unwrap();
        assert_eq!(grid.count_nonzero(), 2);
    }
}
