//! Preprocessing options and configuration.
//!
//! This module provides the [`PreprocessOptions`] struct for configuring the
//! canvas-to-grid pipeline.

use serde::{Deserialize, Serialize};

use crate::api::ConfigurationError;

/// Side length of the reference drawing surface, in canvas pixels.
pub const DEFAULT_CANVAS_SIZE: f64 = 400.0;

/// Side length of the classifier's input raster.
pub const DEFAULT_GRID_SIZE: usize = 28;

/// Largest accepted grid side length.
pub const MAX_GRID_SIZE: usize = 4096;

/// Largest accepted dilation/smoothing window.
pub const MAX_KERNEL_SIZE: usize = 63;

/// Configuration for the canvas-to-grid pipeline.
///
/// All behavior is driven by this explicit record; there are no hidden
/// global defaults.
///
/// # Defaults
///
/// - `canvas_size`: 400.0
/// - `grid_size`: 28
/// - `dilate`: false (thickening can fill the holes of loop shapes)
/// - `center`: true
/// - `blur`: true
/// - `kernel_size`: 3 (used by both dilation and smoothing)
/// - `sigma`: 1.0
/// - `debug`: false
///
/// Deserializing a partial record fills the missing fields from these
/// defaults, so a YAML section only needs the keys it changes.
///
/// # Example
///
/// ```
/// use stroke_raster::PreprocessOptions;
///
/// let options = PreprocessOptions::new()
///     .canvas_size(280.0)
///     .dilate(true)
///     .blur(false);
///
/// assert_eq!(options.grid_size, 28);
/// assert!(options.dilate);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessOptions {
    /// Side length of the input canvas. Must be positive and finite.
    pub canvas_size: f64,

    /// Side length of the output grid. Must be in `1..=MAX_GRID_SIZE`.
    pub grid_size: usize,

    /// Apply the dilation stage.
    pub dilate: bool,

    /// Apply the centering stage.
    pub center: bool,

    /// Apply the Gaussian smoothing stage.
    pub blur: bool,

    /// Window size for dilation and smoothing. Must be odd, positive and
    /// at most [`MAX_KERNEL_SIZE`].
    pub kernel_size: usize,

    /// Gaussian standard deviation, in cells.
    pub sigma: f64,

    /// Produce an ASCII rendering of the final grid.
    pub debug: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            grid_size: DEFAULT_GRID_SIZE,
            dilate: false,
            center: true,
            blur: true,
            kernel_size: 3,
            sigma: 1.0,
            debug: false,
        }
    }
}

impl PreprocessOptions {
    /// Create options with default values.
    ///
    /// This is equivalent to `PreprocessOptions::default()` but more discoverable.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with every optional stage disabled: map and rasterize only.
    #[inline]
    pub fn raw() -> Self {
        Self::default().center(false).blur(false).dilate(false)
    }

    #[inline]
    pub fn canvas_size(mut self, size: f64) -> Self {
        self.canvas_size = size;
        self
    }

    #[inline]
    pub fn grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    #[inline]
    pub fn dilate(mut self, enabled: bool) -> Self {
        self.dilate = enabled;
        self
    }

    #[inline]
    pub fn center(mut self, enabled: bool) -> Self {
        self.center = enabled;
        self
    }

    #[inline]
    pub fn blur(mut self, enabled: bool) -> Self {
        self.blur = enabled;
        self
    }

    #[inline]
    pub fn kernel_size(mut self, size: usize) -> Self {
        self.kernel_size = size;
        self
    }

    #[inline]
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    #[inline]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Check every parameter, failing on the first invalid one.
    ///
    /// Order: grid size, canvas size, kernel size, sigma. Sigma is checked
    /// even when blur is off so a config file error never goes unnoticed.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigurationError::InvalidGridSize(self.grid_size as i64));
        }
        if !(self.canvas_size.is_finite() && self.canvas_size > 0.0) {
            return Err(ConfigurationError::InvalidCanvasSize(self.canvas_size));
        }
        if !kernel_size_ok(self.kernel_size) {
            return Err(ConfigurationError::InvalidKernelSize(
                self.kernel_size as i64,
            ));
        }
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(ConfigurationError::InvalidSigma(self.sigma));
        }
        Ok(())
    }
}

/// Odd, positive and within [`MAX_KERNEL_SIZE`].
pub(crate) fn kernel_size_ok(size: usize) -> bool {
    size % 2 == 1 && size <= MAX_KERNEL_SIZE
}
