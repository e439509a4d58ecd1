//! stroke-raster: freehand strokes to classifier-ready digit grids
//!
//! A digit classifier trained on a reference dataset expects small, centered,
//! anti-aliased images drawn with continuous, moderately thick strokes. Raw
//! pointer input is none of those things: it is sparse, off-scale, off-center
//! and one pixel thin. This crate closes that gap with a deterministic chain
//! of pure grid transforms.
//!
//! # Quick Start
//!
//! The [`CanvasPreprocessor`] is the primary entry point:
//!
//! ```
//! use stroke_raster::{CanvasPreprocessor, InputPoint, Normalization, PreprocessOptions};
//!
//! let pre = CanvasPreprocessor::new(PreprocessOptions::default()).unwrap();
//!
//! let stroke = [
//!     InputPoint::new(200.0, 40.0),
//!     InputPoint::new(200.0, 360.0),
//! ];
//! let grid = pre.canvas_to_grid(&stroke);
//! assert_eq!(grid.size(), 28);
//!
//! // Standardize for the classifier
//! let input = Normalization::MNIST.apply(&grid);
//! assert_eq!(input.shape(), [1, 1, 28, 28]);
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! InputPoint (canvas space, any f64)
//!     |
//!     v
//! CoordinateMapper      floor(coord * (G-1) / C), clamped to [0, G-1]
//!     |
//!     v
//! rasterize             mark cells + Bresenham between consecutive cells
//!     |
//!     v
//! [dilate]              k x k local maximum            (default off)
//!     |
//!     v
//! [center]              circular shift of centroid to (G/2, G/2)
//!     |
//!     v
//! [smooth]              normalized Gaussian, zero padded
//!     |
//!     v
//! clamp                 every cell in [0, 1]
//!     |
//!     v
//! Grid  --->  render_ascii (debug)     Normalization --> ClassifierInput
//! ```
//!
//! # Failure Model
//!
//! Geometric input never causes an error: negative, oversized and
//! non-finite coordinates are clamped, and an empty point list gives a blank
//! grid. The only failures are bad parameters, reported as
//! [`ConfigurationError`] when the preprocessor is built.
//!
//! # Centering Approximation
//!
//! Recentering rolls the grid circularly instead of cropping and padding. A
//! stroke drawn against one border with a large required shift can wrap to
//! the opposite side. The downstream classifier is calibrated on this exact
//! behavior, so it is kept as-is.
//!
//! # Concurrency
//!
//! Every stage is a pure function from `&Grid` to a new [`Grid`]. A
//! [`CanvasPreprocessor`] holds only immutable data (options, mapper and the
//! precomputed [`GaussianKernel`]) and is `Send + Sync`, so a single instance
//! can serve concurrent requests without locking.

pub mod api;
pub mod center;
pub mod filter;
pub mod geometry;
pub mod grid;
pub mod options;
pub mod output;
pub mod raster;


pub use api::{canvas_to_grid, CanvasPreprocessor, ConfigurationError, Preprocessed};
pub use center::{center, centroid, shift, Centroid};
pub use filter::{dilate, smooth, GaussianKernel};
pub use geometry::{GridCell, InputPoint};
pub use grid::Grid;
pub use options::{
    PreprocessOptions, DEFAULT_CANVAS_SIZE, DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MAX_KERNEL_SIZE,
};
pub use output::{render_ascii, ClassifierInput, Normalization};
pub use raster::{bresenham, rasterize, CoordinateMapper};
