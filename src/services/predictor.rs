use stroke_raster::{CanvasPreprocessor, ClassifierInput, Grid, Normalization};

use crate::error::{ClassifierError, ConfigError, PredictError};
use crate::models::{confidence_percent, AppConfig, PredictRequest, PredictResponse, Prediction};

/// Model boundary: standardized grid in, one probability per label out.
pub trait Classifier: Send + Sync {
    fn classify(&self, input: &ClassifierInput) -> Result<Vec<f32>, ClassifierError>;
}

impl<F> Classifier for F
where
    F: Fn(&ClassifierInput) -> Result<Vec<f32>, ClassifierError> + Send + Sync,
{
    fn classify(&self, input: &ClassifierInput) -> Result<Vec<f32>, ClassifierError> {
        self(input)
    }
}

/// Runs a drawing through preprocessing, standardization and a classifier.
pub struct Predictor<C> {
    preprocessor: CanvasPreprocessor,
    normalization: Normalization,
    labels: Vec<String>,
    top_k: usize,
    classifier: C,
}

impl<C: Classifier> Predictor<C> {
    pub fn new(config: &AppConfig, classifier: C) -> Result<Self, PredictError> {
        config.validate()?;
        let preprocessor =
            CanvasPreprocessor::new(config.preprocess.clone()).map_err(ConfigError::from)?;
        Ok(Self {
            preprocessor,
            normalization: config.normalization,
            labels: config.labels.clone(),
            top_k: config.top_k,
            classifier,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn preprocessor(&self) -> &CanvasPreprocessor {
        &self.preprocessor
    }

    /// Preprocessed grid for a request, before standardization.
    pub fn grid(&self, request: &PredictRequest) -> Grid {
        self.preprocessor.strokes_to_grid(&request.to_strokes())
    }

    /// Standardized classifier input for a request.
    pub fn prepare(&self, request: &PredictRequest) -> ClassifierInput {
        self.normalization.apply(&self.grid(request))
    }

    /// Raw probability vector, checked against the label set.
    pub fn probabilities(&self, request: &PredictRequest) -> Result<Vec<f32>, PredictError> {
        let input = self.prepare(request);
        let probs = self.classifier.classify(&input)?;
        if probs.is_empty() || probs.len() != self.labels.len() {
            return Err(PredictError::LabelMismatch {
                expected: self.labels.len(),
                got: probs.len(),
            });
        }
        Ok(probs)
    }

    /// Most likely label. Ties go to the lowest index.
    pub fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, PredictError> {
        let probs = self.probabilities(request)?;
        let (digit, p) = probs
            .iter()
            .copied()
            .enumerate()
            .fold((0, f32::NEG_INFINITY), |best, (i, p)| {
                if p > best.1 {
                    (i, p)
                } else {
                    best
                }
            });
        let response = PredictResponse {
            digit,
            confidence: confidence_percent(p),
        };
        tracing::debug!(
            digit = response.digit,
            confidence = response.confidence,
            points = request.point_count(),
            "Predicted"
        );
        Ok(response)
    }

    /// Top `top_k` labels by probability, highest first. Equal
    /// probabilities keep label order and NaN ranks last.
    pub fn rank(&self, request: &PredictRequest) -> Result<Vec<Prediction>, PredictError> {
        let probs = self.probabilities(request)?;
        let mut order: Vec<usize> = (0..probs.len()).collect();
        let key = |i: usize| {
            if probs[i].is_nan() {
                f32::NEG_INFINITY
            } else {
                probs[i]
            }
        };
        order.sort_by(|&a, &b| key(b).total_cmp(&key(a)));
        Ok(order
            .into_iter()
            .take(self.top_k)
            .map(|i| Prediction {
                label: self.labels[i].clone(),
                confidence: confidence_percent(probs[i]),
            })
            .collect())
    }
}

/// Numerically stable softmax for classifiers that emit logits.
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if !max.is_finite() {
        return vec![0.0; logits.len()];
    }
    let exps: Vec<f32> = logits.iter().map(|&z| (z - max).exp()).collect();
    let total: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;
    use pretty_assertions::assert_eq;

    fn fixed(probs: Vec<f32>) -> impl Classifier {
        move |_: &ClassifierInput| -> Result<Vec<f32>, ClassifierError> { Ok(probs.clone()) }
    }

    fn one_stroke() -> PredictRequest {
        PredictRequest::from_points(vec![Point::new(200.0, 40.0), Point::new(200.0, 360.0)])
    }

    #[test]
    fn test_predict_picks_highest_probability() {
        let mut probs = vec![0.01; 10];
        probs[7] = 0.91;
        let predictor = Predictor::new(&AppConfig::default(), fixed(probs)).unwrap();

        let response = predictor.predict(&one_stroke()).unwrap();
        assert_eq!(
            response,
            PredictResponse {
                digit: 7,
                confidence: 91
            }
        );
    }

    #[test]
    fn test_predict_tie_goes_to_first_label() {
        let predictor = Predictor::new(&AppConfig::default(), fixed(vec![0.1; 10])).unwrap();
        assert_eq!(predictor.predict(&one_stroke()).unwrap().digit, 0);
    }

    #[test]
    fn test_rank_sorted_and_truncated() {
        let probs = vec![0.05, 0.3, 0.05, 0.2, 0.05, 0.05, 0.1, 0.05, 0.1, 0.05];
        let predictor = Predictor::new(&AppConfig::default(), fixed(probs)).unwrap();

        let ranked = predictor.rank(&one_stroke()).unwrap();
        let labels: Vec<&str> = ranked.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "3", "6", "8", "0"]);
        assert_eq!(ranked[0].confidence, 30);
    }

    #[test]
    fn test_rank_respects_top_k() {
        let config = AppConfig {
            top_k: 2,
            ..Default::default()
        };
        let predictor = Predictor::new(&config, fixed(vec![0.1; 10])).unwrap();
        let ranked = predictor.rank(&one_stroke()).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].label, "0");
        assert_eq!(ranked[1].label, "1");
    }

    #[test]
    fn test_rank_tolerates_nan_probabilities() {
        let labels: Vec<String> = (0..64).map(|i| format!("c{i}")).collect();
        let probs: Vec<f32> = (0..64)
            .map(|i| match i % 5 {
                0 => f32::NAN,
                1 => 0.0,
                _ => (i as f32) / 1000.0,
            })
            .collect();
        let config = AppConfig {
            labels,
            top_k: 64,
            ..Default::default()
        };
        let predictor = Predictor::new(&config, fixed(probs.clone())).unwrap();

        let ranked = predictor.rank(&one_stroke()).unwrap();
        assert_eq!(ranked.len(), 64);
        assert_eq!(ranked[0].label, "c63");
        // NaN entries sink to the bottom, in label order
        let tail: Vec<&str> = ranked[51..].iter().map(|p| p.label.as_str()).collect();
        let nan_labels: Vec<String> = (0..64).step_by(5).map(|i| format!("c{i}")).collect();
        assert_eq!(tail, nan_labels.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_label_mismatch_rejected() {
        let predictor = Predictor::new(&AppConfig::default(), fixed(vec![0.5, 0.5])).unwrap();
        let err = predictor.predict(&one_stroke()).unwrap_err();
        assert!(matches!(
            err,
            PredictError::LabelMismatch {
                expected: 10,
                got: 2
            }
        ));
    }

    #[test]
    fn test_empty_probabilities_rejected() {
        let predictor = Predictor::new(&AppConfig::default(), fixed(Vec::new())).unwrap();
        assert!(matches!(
            predictor.rank(&one_stroke()),
            Err(PredictError::LabelMismatch { got: 0, .. })
        ));
    }

    #[test]
    fn test_classifier_error_propagates() {
        let failing = |_: &ClassifierInput| -> Result<Vec<f32>, ClassifierError> {
            Err(ClassifierError("weights missing".to_string()))
        };
        let predictor = Predictor::new(&AppConfig::default(), failing).unwrap();
        let err = predictor.predict(&one_stroke()).unwrap_err();
        assert_eq!(err.to_string(), "Classifier error: weights missing");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AppConfig::default();
        config.preprocess.kernel_size = 2;
        assert!(matches!(
            Predictor::new(&config, fixed(vec![0.1; 10])),
            Err(PredictError::Config(ConfigError::Preprocess(_)))
        ));
    }

    #[test]
    fn test_classifier_sees_standardized_grid() {
        let check = |input: &ClassifierInput| -> Result<Vec<f32>, ClassifierError> {
            assert_eq!(input.shape(), [1, 1, 28, 28]);
            let blank = Normalization::MNIST.apply_value(0.0);
            assert!(input.values().iter().all(|&v| v == blank));
            Ok(vec![0.1; 10])
        };
        let predictor = Predictor::new(&AppConfig::default(), check).unwrap();
        predictor.predict(&PredictRequest::default()).unwrap();
    }

    #[test]
    fn test_points_request_matches_single_stroke_pipeline() {
        let predictor = Predictor::new(&AppConfig::default(), fixed(vec![0.1; 10])).unwrap();
        let request = one_stroke();
        assert_eq!(
            predictor.grid(&request),
            predictor.preprocessor().canvas_to_grid(&request.points)
        );
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0]);
        let total: f32 = probs.iter().sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!(probs[2] > probs[1] && probs[1] > probs[0]);
    }

    #[test]
    fn test_softmax_large_logits_stay_finite() {
        let probs = softmax(&[1000.0, 1000.0]);
        assert_eq!(probs, vec![0.5, 0.5]);
    }

    #[test]
    fn test_softmax_empty() {
        assert!(softmax(&[]).is_empty());
    }
}
