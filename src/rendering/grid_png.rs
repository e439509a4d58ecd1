//! Grid to grayscale PNG, for inspecting what the classifier sees.

use std::io::Cursor;

use stroke_raster::Grid;

use crate::error::RenderError;

/// Largest output side length, in pixels.
pub const MAX_PNG_SIZE: u64 = 4096;

/// Encode `grid` as an 8-bit grayscale PNG, each cell drawn as a
/// `scale` x `scale` block.
///
/// Ink is white on black, like the reference dataset. Cell values are
/// clamped to `[0, 1]` and rounded to the nearest gray level.
pub fn grid_to_png(grid: &Grid, scale: u32) -> Result<Vec<u8>, RenderError> {
    if scale == 0 {
        return Err(RenderError::InvalidScale(scale));
    }
    let side = grid.size() as u64 * scale as u64;
    if side == 0 || side > MAX_PNG_SIZE {
        return Err(RenderError::ImageTooLarge { size: side });
    }

    let pixels = upscale(grid, scale as usize);
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, side as u32, side as u32);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&pixels)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    tracing::debug!(size = side, bytes = buf.get_ref().len(), "Encoded grid PNG");
    Ok(buf.into_inner())
}

/// Map an intensity to a gray level.
pub fn gray_level(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Nearest-neighbour upscale to row-major gray levels.
fn upscale(grid: &Grid, scale: usize) -> Vec<u8> {
    let side = grid.size() * scale;
    let mut pixels = Vec::with_capacity(side * side);
    for row in grid.rows() {
        let line: Vec<u8> = row
            .iter()
            .flat_map(|&v| std::iter::repeat(gray_level(v)).take(scale))
            .collect();
        for _ in 0..scale {
            pixels.extend_from_slice(&line);
        }
    }
    pixels
}
