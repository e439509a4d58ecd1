//! Canvas points to a continuous binary stroke raster.
//!
//! 1. [`CoordinateMapper`] rescales canvas coordinates onto grid cells,
//!    clamping anything outside the canvas.
//! 2. [`rasterize`] marks each cell and fills the straight segment between
//!    consecutive cells with [`bresenham`], turning a sparse dot cloud into
//!    a gap-free stroke.

mod line;
mod mapper;
mod rasterizer;

pub use line::bresenham;
pub use mapper::CoordinateMapper;
pub use rasterizer::{rasterize, rasterize_strokes};
