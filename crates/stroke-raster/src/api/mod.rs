//! Public API for the stroke-raster crate.
//!
//! This module provides the high-level API: the [`CanvasPreprocessor`]
//! orchestrator and the [`ConfigurationError`] type.

mod builder;
mod error;

pub use builder::{canvas_to_grid, CanvasPreprocessor, Preprocessed};
pub use error::ConfigurationError;
