pub mod predictor;

pub use predictor::{softmax, Classifier, Predictor};
