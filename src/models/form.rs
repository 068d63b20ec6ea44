//! Form descriptors
//!
//! A form is an ordered list of named numeric fields. The field order is the
//! feature vector order the matching model was trained with, so it is kept as
//! data (overridable from a JSON file) rather than baked into page code.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Disease;
use crate::error::StartupError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Form key
    pub name: String,
    /// Text shown next to the input
    pub label: String,
}

impl FieldSpec {
    fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDescriptor {
    /// Grid columns used when rendering
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// Fields in feature vector order
    pub fields: Vec<FieldSpec>,
}

fn default_columns() -> usize {
    3
}

impl FormDescriptor {
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.label.as_str()).collect()
    }

    /// Raw submitted values in vector order. Missing keys become empty strings.
    pub fn gather(&self, submitted: &HashMap<String, String>) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| submitted.get(&f.name).cloned().unwrap_or_default())
            .collect()
    }

    fn check(&self) -> Result<(), String> {
        if self.fields.is_empty() {
            return Err("form has no fields".to_string());
        }
        if self.columns == 0 {
            return Err("columns must be at least 1".to_string());
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err("field name must not be empty".to_string());
            }
            if !seen.insert(field.name.as_str()) {
                return Err(format!("duplicate field name '{}'", field.name));
            }
        }
        Ok(())
    }

    pub fn diabetes() -> Self {
        Self {
            columns: 3,
            fields: vec![
                FieldSpec::new("pregnancies", "Number of Pregnancies"),
                FieldSpec::new("glucose", "Glucose Level"),
                FieldSpec::new("blood_pressure", "Blood Pressure value"),
                FieldSpec::new("skin_thickness", "Skin Thickness value"),
                FieldSpec::new("insulin", "Insulin Level"),
                FieldSpec::new("bmi", "BMI value"),
                FieldSpec::new("diabetes_pedigree_function", "Diabetes Pedigree Function value"),
                FieldSpec::new("age", "Age"),
            ],
        }
    }

    pub fn heart_disease() -> Self {
        Self {
            columns: 3,
            fields: vec![
                FieldSpec::new("age", "Age"),
                FieldSpec::new("sex", "Sex (1 = male; 0 = female)"),
                FieldSpec::new("cp", "Chest Pain types"),
                FieldSpec::new("trestbps", "Resting Blood Pressure"),
                FieldSpec::new("chol", "Serum Cholesterol in mg/dl"),
                FieldSpec::new("fbs", "Fasting Blood Sugar > 120 mg/dl"),
                FieldSpec::new("restecg", "Resting Electrocardiographic results"),
                FieldSpec::new("thalach", "Maximum Heart Rate achieved"),
                FieldSpec::new("exang", "Exercise Induced Angina"),
                FieldSpec::new("oldpeak", "ST depression induced by exercise"),
                FieldSpec::new("slope", "Slope of the peak exercise ST segment"),
                FieldSpec::new("ca", "Major vessels colored by fluoroscopy"),
                FieldSpec::new("thal", "Thal: 0 = normal; 1 = fixed defect; 2 = reversible defect"),
            ],
        }
    }

    // The last three fields do not match the usual voice-measurement dataset
    // columns; deployments with a differently trained model should override
    // this order through FORMS_FILE.
    pub fn parkinsons() -> Self {
        Self {
            columns: 5,
            fields: vec![
                FieldSpec::new("fo", "MDVP:Fo(Hz)"),
                FieldSpec::new("fhi", "MDVP:Fhi(Hz)"),
                FieldSpec::new("flo", "MDVP:Flo(Hz)"),
                FieldSpec::new("jitter_percent", "MDVP:Jitter(%)"),
                FieldSpec::new("jitter_abs", "MDVP:Jitter(Abs)"),
                FieldSpec::new("rap", "MDVP:RAP"),
                FieldSpec::new("ppq", "MDVP:PPQ"),
                FieldSpec::new("ddp", "Jitter:DDP"),
                FieldSpec::new("shimmer", "Shimmer"),
                FieldSpec::new("apq3", "Shimmer:APQ3"),
                FieldSpec::new("apq5", "Shimmer:APQ5"),
                FieldSpec::new("dda", "Shimmer:DDA"),
                FieldSpec::new("nhr", "NHR"),
                FieldSpec::new("hnr", "HNR"),
                FieldSpec::new("rpde", "RPDE"),
                FieldSpec::new("dfa", "DFA"),
                FieldSpec::new("spread1", "Spread1"),
                FieldSpec::new("spread2", "Spread2"),
                FieldSpec::new("d2", "D2"),
                FieldSpec::new("ppe", "PPE"),
                FieldSpec::new("total_components", "Total Components"),
                FieldSpec::new("hnr_corr", "HNR Correlation"),
                FieldSpec::new("entropy", "Entropy"),
            ],
        }
    }

    pub fn default_for(disease: Disease) -> Self {
        match disease {
            Disease::Diabetes => Self::diabetes(),
            Disease::HeartDisease => Self::heart_disease(),
            Disease::Parkinsons => Self::parkinsons(),
        }
    }
}

/// One form per disease
#[derive(Debug, Clone)]
pub struct FormCatalog {
    forms: HashMap<Disease, FormDescriptor>,
}

impl Default for FormCatalog {
    fn default() -> Self {
        Self {
            forms: Disease::ALL
                .into_iter()
                .map(|d| (d, FormDescriptor::default_for(d)))
                .collect(),
        }
    }
}

impl FormCatalog {
    /// Built-in forms, with per-disease overrides from `path` when given
    pub fn load(path: Option<&Path>) -> Result<Self, StartupError> {
        let mut catalog = Self::default();
        let Some(path) = path else {
            return Ok(catalog);
        };

        let schema_error = |reason: String| StartupError::FormSchema {
            path: path.to_path_buf(),
            reason,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| schema_error(e.to_string()))?;
        let overrides: HashMap<Disease, FormDescriptor> =
            serde_json::from_str(&raw).map_err(|e| schema_error(e.to_string()))?;

        for (disease, form) in overrides {
            form.check()
                .map_err(|reason| schema_error(format!("{}: {}", disease, reason)))?;
            tracing::info!(disease = %disease, fields = form.arity(), "Form override applied");
            catalog.forms.insert(disease, form);
        }

        Ok(catalog)
    }

    pub fn get(&self, disease: Disease) -> &FormDescriptor {
        // Every disease is populated by Default and overrides only replace entries
        &self.forms[&disease]
    }

    /// Forms in sidebar order
    pub fn iter(&self) -> impl Iterator<Item = (Disease, &FormDescriptor)> {
        Disease::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}
