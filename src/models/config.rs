use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stroke_raster::{Normalization, PreprocessOptions};

use crate::error::ConfigError;

/// Environment variable naming the config file.
pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";

/// Application configuration loaded from config.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Canvas-to-grid pipeline settings
    pub preprocess: PreprocessOptions,

    /// Standardization applied before the classifier
    pub normalization: Normalization,

    /// Classifier output labels, in output order
    pub labels: Vec<String>,

    /// Number of entries in a ranked prediction
    pub top_k: usize,
}

fn default_labels() -> Vec<String> {
    (0..10).map(|d| d.to_string()).collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preprocess: PreprocessOptions::default(),
            normalization: Normalization::MNIST,
            labels: default_labels(),
            top_k: 5,
        }
    }
}

impl AppConfig {
    /// Path from the `CONFIG_FILE` environment variable, if set.
    pub fn path_from_env() -> Option<PathBuf> {
        std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from)
    }

    /// Load configuration from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::debug!("No config file, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            grid_size = config.preprocess.grid_size,
            labels = config.labels.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate a YAML document. Missing keys take defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty mapping
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.preprocess.validate()?;
        let std = self.normalization.std;
        if !std.is_finite() || std == 0.0 || !self.normalization.mean.is_finite() {
            return Err(ConfigError::InvalidNormalization(std));
        }
        if self.labels.is_empty() {
            return Err(ConfigError::NoLabels);
        }
        if self.top_k == 0 {
            return Err(ConfigError::InvalidTopK);
        }
        Ok(())
    }
}
