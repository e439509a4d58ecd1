//! Normalized 2-D Gaussian kernel.

use crate::api::ConfigurationError;
use crate::options::kernel_size_ok;

/// An immutable, normalized `size x size` Gaussian weight matrix.
///
/// Weights follow `exp(-((i - c)^2 + (j - c)^2) / (2 sigma^2))` with
/// `c = size / 2`, then are divided by their total so they sum to 1.0.
/// The center weight is the maximum and weights fall off monotonically with
/// distance from the center.
///
/// A kernel is a pure function of `(size, sigma)`: build it once and share
/// it read-only across threads.
///
/// ```text
/// size = 3, sigma = 1.0
///
///   0.0751  0.1238  0.0751
///   0.1238  0.2042  0.1238
///   0.0751  0.1238  0.0751
/// ```
///
/// # Example
///
/// ```
/// use stroke_raster::GaussianKernel;
///
/// let kernel = GaussianKernel::new(3, 1.0).unwrap();
/// assert!((kernel.sum() - 1.0).abs() < 1e-6);
/// assert!(kernel.weight(1, 1) > kernel.weight(0, 1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    size: usize,
    sigma: f64,
    weights: Vec<f32>,
}

impl GaussianKernel {
    /// Build a kernel.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::InvalidKernelSize`] if `size` is even, zero or above
    ///   [`MAX_KERNEL_SIZE`](crate::options::MAX_KERNEL_SIZE)
    /// - [`ConfigurationError::InvalidSigma`] if `sigma` is not a positive
    ///   finite number
    pub fn new(size: usize, sigma: f64) -> Result<Self, ConfigurationError> {
        if !kernel_size_ok(size) {
            return Err(ConfigurationError::InvalidKernelSize(size as i64));
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(ConfigurationError::InvalidSigma(sigma));
        }

        let center = (size / 2) as f64;
        let denom = 2.0 * sigma * sigma;
        let mut raw = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                let di = i as f64 - center;
                let dj = j as f64 - center;
                raw.push((-(di * di + dj * dj) / denom).exp());
            }
        }

        // Normalize in f64, store as f32 to match the grid precision
        let total: f64 = raw.iter().sum();
        let weights = raw.iter().map(|&w| (w / total) as f32).collect();

        Ok(Self {
            size,
            sigma,
            weights,
        })
    }

    /// Side length (odd).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Offset from any edge to the center cell.
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f32 {
        self.weights[i * self.size + j]
    }

    /// Row-major weights.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Sum of all weights (1.0 up to rounding).
    pub fn sum(&self) -> f64 {
        self.weights.iter().map(|&w| w as f64).sum()
    }
}
