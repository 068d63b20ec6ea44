//! Classifier capability
//!
//! Everything the predict flow needs from a trained model. Concrete artifact
//! formats live behind this trait so handlers and the registry never see them.

use crate::models::Label;

#[derive(Debug, Clone, PartialEq)]
pub struct InferenceError(pub String);

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InferenceError: {}", self.0)
    }
}

impl std::error::Error for InferenceError {}

/// A pre-trained binary classifier
pub trait Classifier: Send + Sync {
    /// Number of input features, when the artifact declares it
    fn arity(&self) -> Option<usize>;

    /// Classify a single feature vector
    fn predict(&self, features: &[f64]) -> Result<Label, InferenceError>;
}
