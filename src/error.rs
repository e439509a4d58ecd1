use std::path::PathBuf;

use stroke_raster::ConfigurationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid preprocessing options: {0}")]
    Preprocess(#[from] ConfigurationError),

    #[error("Label set is empty")]
    NoLabels,

    #[error("top_k must be at least 1")]
    InvalidTopK,

    #[error("Invalid normalization: std {0} must be finite and non-zero")]
    InvalidNormalization(f32),
}

/// Failure reported by a [`Classifier`](crate::services::Classifier).
#[derive(Debug, Error)]
#[error("Classifier error: {0}")]
pub struct ClassifierError(pub String);

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error("Classifier returned {got} probabilities for {expected} labels")]
    LabelMismatch { expected: usize, got: usize },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid scale factor: {0}")]
    InvalidScale(u32),

    #[error("Image too large: {size}x{size} pixels")]
    ImageTooLarge { size: u64 },

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_read() {
        let error = ConfigError::Read {
            path: PathBuf::from("/missing/config.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read config /missing/config.yaml: No such file"
        );
    }

    #[test]
    fn test_config_error_preprocess() {
        let error: ConfigError = ConfigurationError::InvalidKernelSize(4).into();
        assert_eq!(
            error.to_string(),
            "Invalid preprocessing options: invalid kernel size 4: must be a positive odd integer no larger than 63"
        );
    }

    #[test]
    fn test_config_error_no_labels() {
        assert_eq!(ConfigError::NoLabels.to_string(), "Label set is empty");
    }

    #[test]
    fn test_config_error_top_k() {
        assert_eq!(ConfigError::InvalidTopK.to_string(), "top_k must be at least 1");
    }

    #[test]
    fn test_config_error_normalization() {
        let error = ConfigError::InvalidNormalization(0.0);
        assert_eq!(
            error.to_string(),
            "Invalid normalization: std 0 must be finite and non-zero"
        );
    }

    #[test]
    fn test_classifier_error() {
        let error = ClassifierError("model not loaded".to_string());
        assert_eq!(error.to_string(), "Classifier error: model not loaded");
    }

    #[test]
    fn test_predict_error_classifier_is_transparent() {
        let error: PredictError = ClassifierError("timeout".to_string()).into();
        assert_eq!(error.to_string(), "Classifier error: timeout");
    }

    #[test]
    fn test_predict_error_label_mismatch() {
        let error = PredictError::LabelMismatch {
            expected: 10,
            got: 3,
        };
        assert_eq!(
            error.to_string(),
            "Classifier returned 3 probabilities for 10 labels"
        );
    }

    #[test]
    fn test_predict_error_from_config_error() {
        let error: PredictError = ConfigError::NoLabels.into();
        match error {
            PredictError::Config(ConfigError::NoLabels) => {}
            _ => panic!("Expected Config variant"),
        }
    }

    #[test]
    fn test_render_error_invalid_scale() {
        assert_eq!(
            RenderError::InvalidScale(0).to_string(),
            "Invalid scale factor: 0"
        );
    }

    #[test]
    fn test_render_error_image_too_large() {
        let error = RenderError::ImageTooLarge { size: 100_000 };
        assert_eq!(error.to_string(), "Image too large: 100000x100000 pixels");
    }

    #[test]
    fn test_render_error_png_encode() {
        let error = RenderError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }
}
