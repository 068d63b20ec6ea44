//! ONNX Runtime backed classifier

use std::path::Path;

use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;
use parking_lot::Mutex;

use super::classifier::{Classifier, InferenceError};
use crate::models::Label;

/// Output name scikit-learn style converters use for the predicted class
const LABEL_OUTPUT: &str = "label";

/// Classifier loaded from an `.onnx` artifact
pub struct OnnxClassifier {
    name: String,
    // `Session::run` needs exclusive access
    session: Mutex<Session>,
    input_name: String,
    arity: Option<usize>,
}

impl OnnxClassifier {
    pub fn load<P: AsRef<Path>>(path: P, name: &str) -> Result<Self, InferenceError> {
        let path = path.as_ref();

        tracing::info!(model = %name, path = %path.display(), "Loading ONNX model");

        let session = Session::builder()
            .map_err(|e| InferenceError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| InferenceError(format!("Failed to load model: {}", e)))?;

        let input = session
            .inputs()
            .first()
            .ok_or_else(|| InferenceError("Model declares no inputs".to_string()))?;
        let input_name = input.name().to_string();

        let arity = input.dtype().tensor_shape().and_then(|shape| {
            let dims: Vec<i64> = shape.iter().copied().collect();
            arity_from_shape(&dims)
        });

        tracing::info!(
            model = %name,
            input = %input_name,
            arity = ?arity,
            "Model loaded successfully"
        );

        Ok(Self {
            name: name.to_string(),
            session: Mutex::new(session),
            input_name,
            arity,
        })
    }
}

impl Classifier for OnnxClassifier {
    fn arity(&self) -> Option<usize> {
        self.arity
    }

    fn predict(&self, features: &[f64]) -> Result<Label, InferenceError> {
        // Batch of one: shape [1, num_features]
        let shape = vec![1_i64, features.len() as i64];
        let data: Vec<f32> = features.iter().map(|&v| v as f32).collect();
        let input_tensor = Tensor::from_array((shape, data))
            .map_err(|e| InferenceError(format!("Failed to create input tensor: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input_tensor])
            .map_err(|e| InferenceError(format!("{}: inference failed: {}", self.name, e)))?;

        let candidates: Vec<(String, Option<i64>)> = outputs
            .iter()
            .map(|(name, output)| {
                let class = output
                    .try_extract_tensor::<i64>()
                    .ok()
                    .and_then(|(_, data)| data.first().copied());
                (name.to_string(), class)
            })
            .collect();

        let class = select_class(&candidates)
            .ok_or_else(|| InferenceError(format!("{}: no integer label output", self.name)))?;

        label_from_class(&self.name, class)
    }
}

/// Feature count from a `[batch, features]` input shape.
/// Symbolic dimensions are reported as zero or negative and mean "unknown".
fn arity_from_shape(dims: &[i64]) -> Option<usize> {
    dims.last()
        .copied()
        .filter(|dim| *dim > 0)
        .map(|dim| dim as usize)
}

/// First element of the `label` output if the graph has one, else of the
/// first output that holds integers.
fn select_class(outputs: &[(String, Option<i64>)]) -> Option<i64> {
    match outputs.iter().find(|(name, _)| name == LABEL_OUTPUT) {
        Some((_, class)) => *class,
        None => outputs.iter().find_map(|(_, class)| *class),
    }
}

fn label_from_class(model: &str, class: i64) -> Result<Label, InferenceError> {
    Label::from_class(class)
        .ok_or_else(|| InferenceError(format!("{}: unexpected class {}", model, class)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs(entries: &[(&str, Option<i64>)]) -> Vec<(String, Option<i64>)> {
        entries
            .iter()
            .map(|(name, class)| (name.to_string(), *class))
            .collect()
    }

    #[test]
    fn test_arity_from_static_shape() {
        assert_eq!(arity_from_shape(&[1, 8]), Some(8));
        assert_eq!(arity_from_shape(&[-1, 23]), Some(23));
        assert_eq!(arity_from_shape(&[13]), Some(13));
    }

    #[test]
    fn test_arity_from_symbolic_shape() {
        assert_eq!(arity_from_shape(&[1, -1]), None);
        assert_eq!(arity_from_shape(&[-1, 0]), None);
        assert_eq!(arity_from_shape(&[]), None);
    }

    #[test]
    fn test_label_output_preferred() {
        let outs = outputs(&[("probabilities", None), ("scores", Some(0)), ("label", Some(1))]);
        assert_eq!(select_class(&outs), Some(1));
    }

    #[test]
    fn test_non_integer_label_output_is_not_bypassed() {
        let outs = outputs(&[("label", None), ("other", Some(1))]);
        assert_eq!(select_class(&outs), None);
    }

    #[test]
    fn test_falls_back_to_first_integer_output() {
        let outs = outputs(&[("probabilities", None), ("output_label", Some(0)), ("extra", Some(1))]);
        assert_eq!(select_class(&outs), Some(0));
    }

    #[test]
    fn test_no_integer_output() {
        let outs = outputs(&[("probabilities", None)]);
        assert_eq!(select_class(&outs), None);
        assert_eq!(select_class(&[]), None);
    }

    #[test]
    fn test_class_mapping() {
        assert_eq!(label_from_class("diabetes", 0), Ok(Label::Negative));
        assert_eq!(label_from_class("diabetes", 1), Ok(Label::Positive));

        let err = label_from_class("diabetes", 2).unwrap_err();
        assert!(err.0.contains("unexpected class 2"));
        assert!(label_from_class("diabetes", -1).is_err());
    }
}
