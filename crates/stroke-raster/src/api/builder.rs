//! CanvasPreprocessor -- the primary entry point for the crate.
//!
//! [`CanvasPreprocessor`] validates a [`PreprocessOptions`] once, caches the
//! Gaussian kernel, and then turns any number of point sequences into
//! finished grids.

use tracing::{debug, warn};

use crate::center::center;
use crate::filter::{dilate, smooth, GaussianKernel};
use crate::geometry::InputPoint;
use crate::grid::Grid;
use crate::options::PreprocessOptions;
use crate::output::render_ascii;
use crate::raster::{rasterize, rasterize_strokes, CoordinateMapper};

use super::ConfigurationError;

/// Result of [`CanvasPreprocessor::process`].
#[derive(Debug, Clone, PartialEq)]
pub struct Preprocessed {
    /// Final grid, every cell in `[0, 1]`.
    pub grid: Grid,
    /// ASCII rendering of `grid`, present only when `debug` is enabled.
    pub debug: Option<String>,
}

/// Canvas-to-grid pipeline.
///
/// Stages run in a fixed order, bracketed ones only when enabled:
///
/// ```text
/// points --map--> cells --rasterize--> grid
///        --[dilate]--> --[center]--> --[blur]--> clamp --> grid
/// ```
///
/// # Design
///
/// - Construction validates every parameter and fails with
///   [`ConfigurationError`]; processing itself never fails
/// - The Gaussian kernel is built once and reused for every call
/// - Processing methods take `&self`, hold no mutable state, and are
///   deterministic: the same points and options always give bit-identical
///   grids
/// - The type is `Send + Sync`, so one instance can serve many threads
///
/// # Example
///
/// ```
/// use stroke_raster::{CanvasPreprocessor, InputPoint, PreprocessOptions};
///
/// let pre = CanvasPreprocessor::new(PreprocessOptions::new()).unwrap();
/// let stroke = [InputPoint::new(100.0, 50.0), InputPoint::new(120.0, 350.0)];
///
/// let grid = pre.canvas_to_grid(&stroke);
/// assert_eq!(grid.size(), 28);
/// assert!(grid.values().iter().all(|v| (0.0..=1.0).contains(v)));
/// ```
#[derive(Debug, Clone)]
pub struct CanvasPreprocessor {
    options: PreprocessOptions,
    mapper: CoordinateMapper,
    kernel: GaussianKernel,
}

impl CanvasPreprocessor {
    /// Validate `options` and build the pipeline.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] found by
    /// [`PreprocessOptions::validate`].
    pub fn new(options: PreprocessOptions) -> Result<Self, ConfigurationError> {
        options.validate()?;
        let kernel = GaussianKernel::new(options.kernel_size, options.sigma)?;
        let mapper = CoordinateMapper::new(options.canvas_size, options.grid_size);
        debug!(
            grid_size = options.grid_size,
            canvas_size = options.canvas_size,
            dilate = options.dilate,
            center = options.center,
            blur = options.blur,
            "built canvas preprocessor"
        );
        Ok(Self {
            options,
            mapper,
            kernel,
        })
    }

    #[inline]
    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }

    #[inline]
    pub fn kernel(&self) -> &GaussianKernel {
        &self.kernel
    }

    #[inline]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Run the full pipeline on one stroke session.
    ///
    /// An empty sequence yields a blank grid.
    pub fn canvas_to_grid(&self, points: &[InputPoint]) -> Grid {
        warn_non_finite(points);
        let cells = self.mapper.map_all(points);
        let grid = rasterize(&cells, self.options.grid_size);
        debug!(
            points = points.len(),
            filled = grid.count_nonzero(),
            "rasterized stroke"
        );
        self.finish(grid)
    }

    /// Run the pipeline on several pen-down/pen-up strokes.
    ///
    /// Points are connected within each stroke only.
    pub fn strokes_to_grid(&self, strokes: &[Vec<InputPoint>]) -> Grid {
        let cells: Vec<_> = strokes
            .iter()
            .map(|stroke| {
                warn_non_finite(stroke);
                self.mapper.map_all(stroke)
            })
            .collect();
        let grid = rasterize_strokes(&cells, self.options.grid_size);
        debug!(
            strokes = strokes.len(),
            filled = grid.count_nonzero(),
            "rasterized strokes"
        );
        self.finish(grid)
    }

    /// Like [`canvas_to_grid`](Self::canvas_to_grid), plus the ASCII view
    /// when the `debug` option is set.
    pub fn process(&self, points: &[InputPoint]) -> Preprocessed {
        self.with_debug(self.canvas_to_grid(points))
    }

    /// Like [`strokes_to_grid`](Self::strokes_to_grid), plus the ASCII view
    /// when the `debug` option is set.
    pub fn process_strokes(&self, strokes: &[Vec<InputPoint>]) -> Preprocessed {
        self.with_debug(self.strokes_to_grid(strokes))
    }

    fn with_debug(&self, grid: Grid) -> Preprocessed {
        let debug = self.options.debug.then(|| render_ascii(&grid));
        Preprocessed { grid, debug }
    }

    /// Optional stages and the final clamp.
    fn finish(&self, mut grid: Grid) -> Grid {
        if self.options.dilate {
            grid = dilate(&grid, self.options.kernel_size);
            debug!(filled = grid.count_nonzero(), "dilated");
        }
        if self.options.center {
            grid = center(&grid);
        }
        if self.options.blur {
            grid = smooth(&grid, &self.kernel);
            debug!(max = grid.max(), "smoothed");
        }
        grid.clamped()
    }
}

fn warn_non_finite(points: &[InputPoint]) {
    let bad = points.iter().filter(|p| !p.is_finite()).count();
    if bad > 0 {
        warn!(count = bad, "non-finite coordinates clamped onto the grid");
    }
}

/// One-shot convenience: validate `options`, then run the pipeline once.
///
/// Prefer building a [`CanvasPreprocessor`] when processing more than one
/// input, so the kernel is computed once.
///
/// # Example
///
/// ```
/// use stroke_raster::{canvas_to_grid, PreprocessOptions};
///
/// let grid = canvas_to_grid(&[], &PreprocessOptions::default()).unwrap();
/// assert!(grid.is_blank());
/// ```
pub fn canvas_to_grid(
    points: &[InputPoint],
    options: &PreprocessOptions,
) -> Result<Grid, ConfigurationError> {
    Ok(CanvasPreprocessor::new(options.clone())?.canvas_to_grid(points))
}
