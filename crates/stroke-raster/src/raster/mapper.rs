//! Canvas-space to grid-space coordinate mapping.

use crate::geometry::{GridCell, InputPoint};

/// Linear rescaler from canvas coordinates onto grid cells.
///
/// Each axis maps as `floor(coord * (grid_size - 1) / canvas_size)` and is
/// then clamped into `[0, grid_size - 1]`, so the corners land exactly:
/// `(0, 0) -> (0, 0)` and `(canvas_size, canvas_size) ->
/// (grid_size - 1, grid_size - 1)`.
///
/// The mapper never fails. Out-of-range input is clamped, never wrapped.
/// Non-finite input is clamped as well: `NaN` goes to 0, `+inf` to the last
/// cell and `-inf` to 0.
///
/// `x` selects the column and `y` selects the row.
///
/// # Example
///
/// ```
/// use stroke_raster::{CoordinateMapper, GridCell, InputPoint};
///
/// let mapper = CoordinateMapper::new(400.0, 28);
/// assert_eq!(mapper.map(InputPoint::new(0.0, 0.0)), GridCell::new(0, 0));
/// assert_eq!(mapper.map(InputPoint::new(400.0, 400.0)), GridCell::new(27, 27));
/// assert_eq!(mapper.map(InputPoint::new(-50.0, 500.0)), GridCell::new(27, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    canvas_size: f64,
    grid_size: usize,
}

impl CoordinateMapper {
    /// Create a mapper.
    ///
    /// `canvas_size` must be positive and `grid_size` at least 1; the
    /// preprocessor validates both before building a mapper.
    #[inline]
    pub fn new(canvas_size: f64, grid_size: usize) -> Self {
        debug_assert!(canvas_size > 0.0, "canvas_size must be positive");
        debug_assert!(grid_size > 0, "grid_size must be positive");
        Self {
            canvas_size,
            grid_size,
        }
    }

    #[inline]
    pub fn canvas_size(&self) -> f64 {
        self.canvas_size
    }

    #[inline]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Map one canvas point to its grid cell.
    #[inline]
    pub fn map(&self, point: InputPoint) -> GridCell {
        GridCell {
            row: self.axis(point.y),
            col: self.axis(point.x),
        }
    }

    /// Map a whole point sequence, preserving order.
    pub fn map_all(&self, points: &[InputPoint]) -> Vec<GridCell> {
        points.iter().map(|&p| self.map(p)).collect()
    }

    fn axis(&self, coord: f64) -> usize {
        // c * (G-1) / c can round to just below G-1 for fractional sizes
        if coord >= self.canvas_size {
            return self.grid_size - 1;
        }
        let last = (self.grid_size - 1) as f64;
        let scaled = (coord * last / self.canvas_size).floor();
        if scaled.is_nan() {
            return 0;
        }
        scaled.clamp(0.0, last) as usize
    }
}
