//! Human-readable text view of a grid.

use crate::grid::Grid;

/// Intensity ramp, emptiest first.
pub const ASCII_RAMP: &[u8; 10] = b" .:-=+*#%@";

/// Render a grid as `size` lines of `size` characters.
///
/// Each cell is clamped into `[0, 1]` and drawn as
/// `ASCII_RAMP[floor(value * 9)]`. Lines are joined with `\n` and there is
/// no trailing newline. Purely diagnostic; it never affects the grid.
///
/// # Example
///
/// ```
/// use stroke_raster::{render_ascii, Grid};
///
/// let grid = Grid::from_values(2, vec![0.0, 1.0, 0.5, 0.12]).unwrap();
/// assert_eq!(render_ascii(&grid), " @\n=.");
/// ```
pub fn render_ascii(grid: &Grid) -> String {
    let n = grid.size();
    let mut out = String::with_capacity(n * (n + 1));
    for (r, row) in grid.rows().enumerate() {
        if r > 0 {
            out.push('\n');
        }
        for &v in row {
            out.push(ramp_char(v));
        }
    }
    out
}

#[inline]
fn ramp_char(value: f32) -> char {
    let v = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    let idx = (v * 9.0).floor() as usize;
    ASCII_RAMP[idx.min(9)] as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(ramp_char(0.0), ' ');
        assert_eq!(ramp_char(1.0), '@');
        assert_eq!(ramp_char(-3.0), ' ');
        assert_eq!(ramp_char(7.0), '@');
        assert_eq!(ramp_char(f32::NAN), ' ');
    }

    #[test]
    fn test_ramp_is_floor_of_value_times_nine() {
        let expected = " .:-=+*#%@";
        for (i, ch) in expected.chars().enumerate() {
            let v = i as f32 / 9.0 + 0.01;
            assert_eq!(ramp_char(v.min(1.0)), ch, "value {v}");
        }
    }

    #[test]
    fn test_shape() {
        let text = render_ascii(&Grid::new(28));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 28);
        assert!(lines.iter().all(|l| l.len() == 28));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_marks_visible() {
        let mut grid = Grid::new(3);
        grid.set(1, 1, 1.0);
        assert_eq!(render_ascii(&grid), "   \n @ \n   ");
    }
}
