//! Assertion helpers for tests.

use guessme::stroke_raster::{centroid, Grid};
use pretty_assertions::assert_eq;

/// Assert every cell is a finite value in [0, 1]
pub fn assert_unit_range(grid: &Grid) {
    for (i, v) in grid.values().iter().enumerate() {
        assert!(
            v.is_finite() && (0.0..=1.0).contains(v),
            "Cell ({}, {}) out of range: {v}",
            i / grid.size(),
            i % grid.size()
        );
    }
}

/// Assert the grid has the expected side length and cell count
pub fn assert_grid_size(grid: &Grid, expected: usize) {
    assert_eq!(grid.size(), expected, "Unexpected grid size");
    assert_eq!(grid.values().len(), expected * expected);
}

/// Assert the ink centroid lies within `tolerance` cells of the grid center
pub fn assert_centered(grid: &Grid, tolerance: f64) {
    let c = centroid(grid);
    let target = (grid.size() / 2) as f64;
    assert!(
        (c.cy - target).abs() <= tolerance && (c.cx - target).abs() <= tolerance,
        "Centroid ({:.2}, {:.2}) not within {tolerance} of ({target}, {target})",
        c.cy,
        c.cx
    );
}

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}
