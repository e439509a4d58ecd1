//! Guessme - handwritten digit guessing
//!
//! Turns freehand canvas strokes into classifier inputs and classifier
//! outputs into ranked guesses. The pure preprocessing pipeline lives in
//! the `stroke-raster` crate; this library adds configuration, request and
//! response schemas, the predictor service and grid export.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use stroke_raster;
