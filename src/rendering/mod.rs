pub mod grid_png;

pub use grid_png::{gray_level, grid_to_png, MAX_PNG_SIZE};
