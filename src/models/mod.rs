pub mod config;
pub mod request;

pub use config::{AppConfig, CONFIG_FILE_ENV};
pub use request::{
    confidence_percent, GridExport, Point, PredictRequest, PredictResponse, Prediction,
};
