//! Neighborhood filters: stroke thickening and anti-aliasing.
//!
//! - [`dilate`]: local maximum over a square window (optional stage)
//! - [`smooth`]: convolution with a normalized [`GaussianKernel`]
//!
//! Both are pure functions from `&Grid` to a new `Grid` of the same size.

mod dilate;
mod kernel;
mod smooth;

pub use dilate::dilate;
pub use kernel::GaussianKernel;
pub use smooth::smooth;
