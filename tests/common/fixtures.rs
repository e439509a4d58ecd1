//! Test fixtures and constants.

use guessme::error::ClassifierError;
use guessme::models::{Point, PredictRequest};
use guessme::stroke_raster::ClassifierInput;

/// Request bodies as the drawing surface sends them
pub mod requests {
    /// A single vertical stroke down the middle of the canvas
    pub const VERTICAL_LINE: &str =
        r#"{"points":[{"x":200,"y":40},{"x":200,"y":200},{"x":200,"y":360}]}"#;

    /// Two separate strokes forming a cross
    pub const CROSS: &str = r#"{"strokes":[
        [{"x":100,"y":200},{"x":300,"y":200}],
        [{"x":200,"y":100},{"x":200,"y":300}]
    ]}"#;

    /// No ink at all
    pub const EMPTY: &str = r#"{"points":[]}"#;
}

/// Closed loop approximating a zero, `samples` points
pub fn circle(cx: f64, cy: f64, r: f64, samples: usize) -> Vec<Point> {
    (0..=samples)
        .map(|i| {
            let t = i as f64 / samples as f64 * std::f64::consts::TAU;
            Point::new(cx + r * t.cos(), cy + r * t.sin())
        })
        .collect()
}

/// Vertical stroke sampled only at its endpoints
pub fn sparse_line(x: f64, y0: f64, y1: f64) -> PredictRequest {
    PredictRequest::from_points(vec![Point::new(x, y0), Point::new(x, y1)])
}

/// Classifier that always answers with the given probabilities
pub fn fixed_classifier(
    probs: Vec<f32>,
) -> impl Fn(&ClassifierInput) -> Result<Vec<f32>, ClassifierError> + Send + Sync {
    move |_: &ClassifierInput| -> Result<Vec<f32>, ClassifierError> { Ok(probs.clone()) }
}

/// Classifier that scores labels by ink density: more ink, higher label.
///
/// Enough structure to tell drawings apart without any model weights.
pub fn ink_classifier(
    labels: usize,
) -> impl Fn(&ClassifierInput) -> Result<Vec<f32>, ClassifierError> + Send + Sync {
    move |input: &ClassifierInput| -> Result<Vec<f32>, ClassifierError> {
        let blank = input.values().iter().copied().fold(f32::INFINITY, f32::min);
        let inked = input.values().iter().filter(|&&v| v > blank).count();
        let bucket = (inked * labels / input.values().len().max(1)).min(labels - 1);
        let mut logits = vec![0.0; labels];
        logits[bucket] = 5.0;
        Ok(guessme::services::softmax(&logits))
    }
}
