//! Point types on both sides of the coordinate mapping.
//!
//! [`InputPoint`] lives in canvas space (real-valued, unchecked) and
//! [`GridCell`] lives in grid space (integer, always in bounds once produced
//! by [`CoordinateMapper`](crate::raster::CoordinateMapper)).

use serde::{Deserialize, Serialize};

/// A pointer sample in canvas coordinates.
///
/// Coordinates are nominally in `0..=canvas_size` but any `f64` is accepted,
/// including negative, oversized and non-finite values. The mapper clamps
/// them instead of rejecting them.
///
/// Serializes as `{"x": .., "y": ..}`, the shape the drawing surface sends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputPoint {
    /// Horizontal position (maps to grid column).
    pub x: f64,
    /// Vertical position (maps to grid row).
    pub y: f64,
}

impl InputPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for InputPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A cell address in the raster grid, `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev (king-move) distance to another cell.
    #[inline]
    pub fn chebyshev(&self, other: &GridCell) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}
