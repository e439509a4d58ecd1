//! Configuration errors, the only way the pipeline can fail.
//!
//! Geometric input is never rejected (it is clamped), so every failure is
//! a bad parameter caught when a [`CanvasPreprocessor`](super::CanvasPreprocessor)
//! or [`GaussianKernel`](crate::filter::GaussianKernel) is constructed,
//! before any points are processed.

use thiserror::Error;

/// Invalid pipeline parameter.
///
/// Parameters are reported as given and never coerced into range.
///
/// # Example
///
/// ```
/// use stroke_raster::{CanvasPreprocessor, ConfigurationError, PreprocessOptions};
///
/// let err = CanvasPreprocessor::new(PreprocessOptions::new().kernel_size(4)).unwrap_err();
/// assert_eq!(err, ConfigurationError::InvalidKernelSize(4));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// Kernel size must be a positive odd integer, at most 63
    #[error("invalid kernel size {0}: must be a positive odd integer no larger than 63")]
    InvalidKernelSize(i64),

    /// Grid size must be between 1 and 4096
    #[error("invalid grid size {0}: must be between 1 and 4096")]
    InvalidGridSize(i64),

    /// Canvas size must be a positive finite number
    #[error("invalid canvas size {0}: must be a positive finite number")]
    InvalidCanvasSize(f64),

    /// Gaussian sigma must be a positive finite number
    #[error("invalid sigma {0}: must be a positive finite number")]
    InvalidSigma(f64),
}
