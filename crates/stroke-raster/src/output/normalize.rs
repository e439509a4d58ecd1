//! Dataset standardization at the classifier boundary.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Per-dataset affine standardization, `(v - mean) / std`.
///
/// The classifier was trained on inputs standardized this way, so the
/// arithmetic is fixed: `f32` subtraction followed by `f32` division, in
/// that order, with no fused or reordered operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalization {
    pub mean: f32,
    pub std: f32,
}

impl Normalization {
    /// Statistics of the handwritten-digit reference dataset.
    pub const MNIST: Self = Self {
        mean: 0.1307,
        std: 0.3081,
    };

    #[inline]
    pub const fn new(mean: f32, std: f32) -> Self {
        Self { mean, std }
    }

    /// Standardize a single intensity.
    #[inline]
    pub fn apply_value(&self, value: f32) -> f32 {
        (value - self.mean) / self.std
    }

    /// Standardize every cell of a grid.
    pub fn apply(&self, grid: &Grid) -> ClassifierInput {
        ClassifierInput {
            size: grid.size(),
            values: grid.values().iter().map(|&v| self.apply_value(v)).collect(),
        }
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self::MNIST
    }
}

/// A standardized grid ready for the classifier.
///
/// Logically a `[1, 1, size, size]` tensor (batch, channel, rows, cols);
/// values are stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierInput {
    size: usize,
    values: Vec<f32>,
}

impl ClassifierInput {
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Tensor shape as `[batch, channel, rows, cols]`.
    #[inline]
    pub fn shape(&self) -> [usize; 4] {
        [1, 1, self.size, self.size]
    }

    pub fn into_values(self) -> Vec<f32> {
        self.values
    }
}
