use serde::{Deserialize, Serialize};
use stroke_raster::{Grid, InputPoint};

/// A pointer sample as sent by the drawing surface: `{"x": .., "y": ..}`.
pub type Point = InputPoint;

/// Prediction request body.
///
/// The drawing surface sends either one flat `points` list or a `strokes`
/// list with one entry per pen-down/pen-up sequence. Both may be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub points: Vec<Point>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Vec<Point>>,
}

impl PredictRequest {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            points,
            strokes: Vec::new(),
        }
    }

    pub fn from_strokes(strokes: Vec<Vec<Point>>) -> Self {
        Self {
            points: Vec::new(),
            strokes,
        }
    }

    /// All strokes in drawing order. A non-empty flat `points` list counts
    /// as one extra stroke after the explicit ones.
    pub fn to_strokes(&self) -> Vec<Vec<Point>> {
        let mut strokes = self.strokes.clone();
        if !self.points.is_empty() {
            strokes.push(self.points.clone());
        }
        strokes
    }

    /// Total number of samples across both shapes.
    pub fn point_count(&self) -> usize {
        self.points.len() + self.strokes.iter().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

/// Single best guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Index of the winning label.
    pub digit: usize,
    /// Winning probability as a truncated percentage, `0..=100`.
    pub confidence: u8,
}

/// One entry of a ranked prediction list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub confidence: u8,
}

/// Convert a probability to a truncated percentage.
pub fn confidence_percent(probability: f32) -> u8 {
    if probability.is_nan() {
        return 0;
    }
    (probability.clamp(0.0, 1.0) * 100.0).trunc() as u8
}

/// JSON export of a preprocessed grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridExport {
    pub size: usize,
    /// True when `values` are standardized classifier inputs rather than
    /// intensities in `[0, 1]`.
    pub normalized: bool,
    /// Row-major, one inner list per row.
    pub values: Vec<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

impl GridExport {
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            size: grid.size(),
            normalized: false,
            values: grid.rows().map(<[f32]>::to_vec).collect(),
            debug: None,
        }
    }

    pub fn from_values(size: usize, values: &[f32]) -> Self {
        Self {
            size,
            normalized: true,
            values: values.chunks(size.max(1)).map(<[f32]>::to_vec).collect(),
            debug: None,
        }
    }

    pub fn with_debug(mut self, debug: Option<String>) -> Self {
        self.debug = debug;
        self
    }
}
