//! Consumers of the finished grid.
//!
//! - [`render_ascii`]: diagnostic text view (the `debug` option)
//! - [`Normalization`]: standardization into a [`ClassifierInput`]

mod ascii;
mod normalize;

pub use ascii::{render_ascii, ASCII_RAMP};
pub use normalize::{ClassifierInput, Normalization};
