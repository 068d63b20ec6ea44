//! Model loading and prediction

pub mod classifier;
pub mod onnx;
pub mod predictor;
pub mod registry;

pub use classifier::{Classifier, InferenceError};
pub use onnx::OnnxClassifier;
pub use registry::{LoadedModel, ModelRegistry, ModelStatus};
