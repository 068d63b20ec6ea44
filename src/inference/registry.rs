//! Model registry - loads the three artifacts once at startup

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use super::classifier::Classifier;
use super::onnx::OnnxClassifier;
use crate::config::Config;
use crate::error::StartupError;
use crate::models::{Disease, FormCatalog};

/// A loaded classifier together with the input count it is checked against
pub struct LoadedModel {
    pub classifier: Arc<dyn Classifier>,
    pub arity: usize,
}

/// Status entry for the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ModelStatus {
    pub disease: Disease,
    pub artifact: &'static str,
    pub arity: usize,
}

/// Read-only set of models, one per disease
pub struct ModelRegistry {
    models: HashMap<Disease, LoadedModel>,
}

impl ModelRegistry {
    /// Load every artifact from `config.model_dir`, failing on the first bad one
    pub fn load(config: &Config, forms: &FormCatalog) -> Result<Self, StartupError> {
        if !config.model_dir.is_dir() {
            return Err(StartupError::ModelDirMissing {
                path: config.model_dir.clone(),
            });
        }

        let mut classifiers: Vec<(Disease, Arc<dyn Classifier>)> = Vec::new();
        for disease in Disease::ALL {
            let artifact = disease.artifact_file();
            let path = config.artifact_path(disease);

            if !path.is_file() {
                return Err(StartupError::ArtifactMissing { artifact, path });
            }

            let classifier = OnnxClassifier::load(&path, disease.key())
                .map_err(|e| StartupError::ArtifactCorrupt {
                    artifact,
                    reason: e.0,
                })?;

            let classifier: Arc<dyn Classifier> = Arc::new(classifier);
            classifiers.push((disease, classifier));
        }

        let registry = Self::from_classifiers(classifiers, forms);
        tracing::info!(count = registry.models.len(), dir = %config.model_dir.display(), "Models loaded");
        Ok(registry)
    }

    /// Build a registry from already constructed classifiers.
    ///
    /// The effective arity is the model's own when it declares one, otherwise
    /// the field count of the disease's form.
    pub fn from_classifiers<I>(classifiers: I, forms: &FormCatalog) -> Self
    where
        I: IntoIterator<Item = (Disease, Arc<dyn Classifier>)>,
    {
        let models = classifiers
            .into_iter()
            .map(|(disease, classifier)| {
                let form_arity = forms.get(disease).arity();
                let arity = match classifier.arity() {
                    Some(model_arity) => {
                        if model_arity != form_arity {
                            tracing::warn!(
                                disease = %disease,
                                model_arity,
                                form_arity,
                                "Model input count differs from form field count"
                            );
                        }
                        model_arity
                    }
                    None => form_arity,
                };
                (disease, LoadedModel { classifier, arity })
            })
            .collect();

        Self { models }
    }

    pub fn get(&self, disease: Disease) -> Option<&LoadedModel> {
        self.models.get(&disease)
    }

    pub fn status(&self) -> Vec<ModelStatus> {
        Disease::ALL
            .into_iter()
            .filter_map(|disease| {
                self.get(disease).map(|model| ModelStatus {
                    disease,
                    artifact: disease.artifact_file(),
                    arity: model.arity,
                })
            })
            .collect()
    }
}
