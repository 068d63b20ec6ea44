//! Predictor adapter

use super::registry::ModelRegistry;
use crate::error::PredictError;
use crate::models::{Disease, Prediction};

impl ModelRegistry {
    /// Run the disease's model on one feature vector.
    ///
    /// The vector length is checked before the model is touched; the model
    /// then sees exactly this one vector.
    pub fn predict(&self, disease: Disease, features: &[f64]) -> Result<Prediction, PredictError> {
        let model = self.get(disease).ok_or_else(|| PredictError::Model {
            disease,
            reason: "model not loaded".to_string(),
        })?;

        if features.len() != model.arity {
            return Err(PredictError::ArityMismatch {
                disease,
                expected: model.arity,
                actual: features.len(),
            });
        }

        let label = model.classifier.predict(features).map_err(|e| {
            tracing::error!(disease = %disease, error = %e, "Model inference failed");
            PredictError::Model {
                disease,
                reason: e.0,
            }
        })?;

        let prediction = Prediction::new(disease, label);
        tracing::info!(disease = %disease, label = prediction.label, "Prediction complete");
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::classifier::testing::RecordingClassifier;
    use crate::inference::classifier::Classifier;
    use crate::models::{FormCatalog, Label};
    use std::sync::Arc;

    fn registry_with(disease: Disease, classifier: Arc<RecordingClassifier>) -> ModelRegistry {
        let classifier: Arc<dyn Classifier> = classifier;
        ModelRegistry::from_classifiers([(disease, classifier)], &FormCatalog::default())
    }

    #[test]
    fn test_single_call_with_exact_vector() {
        let model = Arc::new(RecordingClassifier::new(8, Label::Positive));
        let registry = registry_with(Disease::Diabetes, model.clone());

        let vector = vec![2.0, 120.0, 70.0, 20.0, 79.0, 25.5, 0.5, 30.0];
        let prediction = registry.predict(Disease::Diabetes, &vector).unwrap();

        assert_eq!(prediction.message, "The person is diabetic");
        assert_eq!(model.calls(), vec![vector]);
    }

    #[test]
    fn test_arity_checked_before_model() {
        let model = Arc::new(RecordingClassifier::new(13, Label::Positive));
        let registry = registry_with(Disease::HeartDisease, model.clone());

        let err = registry.predict(Disease::HeartDisease, &[1.0; 12]).unwrap_err();
        assert_eq!(
            err,
            PredictError::ArityMismatch {
                disease: Disease::HeartDisease,
                expected: 13,
                actual: 12,
            }
        );
        assert!(model.calls().is_empty());
    }

    #[test]
    fn test_one_value_too_many() {
        let model = Arc::new(RecordingClassifier::new(23, Label::Positive));
        let registry = registry_with(Disease::Parkinsons, model.clone());

        let err = registry.predict(Disease::Parkinsons, &[1.0; 24]).unwrap_err();
        assert_eq!(
            err,
            PredictError::ArityMismatch {
                disease: Disease::Parkinsons,
                expected: 23,
                actual: 24,
            }
        );
        assert!(model.calls().is_empty());
    }

    #[test]
    fn test_deterministic() {
        let model = Arc::new(RecordingClassifier::new(23, Label::Negative));
        let registry = registry_with(Disease::Parkinsons, model.clone());

        let vector = vec![0.1; 23];
        let first = registry.predict(Disease::Parkinsons, &vector).unwrap();
        let second = registry.predict(Disease::Parkinsons, &vector).unwrap();

        assert_eq!(first.label, second.label);
        assert_eq!(first.message, "The person does not have Parkinson's disease");
        assert_eq!(model.calls().len(), 2);
    }

    #[test]
    fn test_model_failure_surfaces() {
        let model = Arc::new(RecordingClassifier::failing(8, "bad graph"));
        let registry = registry_with(Disease::Diabetes, model);

        let err = registry.predict(Disease::Diabetes, &[0.0; 8]).unwrap_err();
        assert!(matches!(err, PredictError::Model { ref reason, .. } if reason == "bad graph"));
    }

    #[test]
    fn test_unloaded_model() {
        let registry = ModelRegistry::from_classifiers(
            std::iter::empty::<(Disease, Arc<dyn Classifier>)>(),
            &FormCatalog::default(),
        );
        assert!(registry.predict(Disease::Diabetes, &[0.0; 8]).is_err());
    }
}
