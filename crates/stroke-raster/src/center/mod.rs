//! Mass-based recentering.
//!
//! Hand-drawn digits land anywhere on the canvas, while the reference
//! dataset has every digit's center of mass at the image center. This
//! stage computes the [`centroid`] and rolls the grid so the centroid sits
//! on [`grid_center`].

mod centroid;
mod shift;

pub use centroid::{centroid, grid_center, Centroid};
pub use shift::{center, centering_offsets, shift};
