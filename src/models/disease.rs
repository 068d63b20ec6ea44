//! Disease model

use serde::{Deserialize, Serialize};

/// One of the three supported predictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    Diabetes,
    HeartDisease,
    Parkinsons,
}

impl Disease {
    /// Sidebar order; the first entry is the default view
    pub const ALL: [Disease; 3] = [Disease::Diabetes, Disease::HeartDisease, Disease::Parkinsons];

    pub fn slug(self) -> &'static str {
        match self {
            Disease::Diabetes => "diabetes",
            Disease::HeartDisease => "heart-disease",
            Disease::Parkinsons => "parkinsons",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.slug() == slug)
    }

    /// Key used in the forms override file
    pub fn key(self) -> &'static str {
        match self {
            Disease::Diabetes => "diabetes",
            Disease::HeartDisease => "heart_disease",
            Disease::Parkinsons => "parkinsons",
        }
    }

    pub fn menu_label(self) -> &'static str {
        match self {
            Disease::Diabetes => "Diabetes Prediction",
            Disease::HeartDisease => "Heart Disease Prediction",
            Disease::Parkinsons => "Parkinson's Prediction",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Disease::Diabetes => "Diabetes Prediction using ML",
            Disease::HeartDisease => "Heart Disease Prediction using ML",
            Disease::Parkinsons => "Parkinson's Disease Prediction using ML",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Disease::Diabetes => "Diabetes Test Result",
            Disease::HeartDisease => "Heart Disease Test Result",
            Disease::Parkinsons => "Parkinson's Test Result",
        }
    }

    /// File name of the serialized classifier inside the model directory
    pub fn artifact_file(self) -> &'static str {
        match self {
            Disease::Diabetes => "diabetes_model.onnx",
            Disease::HeartDisease => "heart_disease_model.onnx",
            Disease::Parkinsons => "parkinsons_model.onnx",
        }
    }

    pub fn positive_message(self) -> &'static str {
        match self {
            Disease::Diabetes => "The person is diabetic",
            Disease::HeartDisease => "The person has heart disease",
            Disease::Parkinsons => "The person has Parkinson's disease",
        }
    }

    pub fn negative_message(self) -> &'static str {
        match self {
            Disease::Diabetes => "The person is not diabetic",
            Disease::HeartDisease => "The person does not have heart disease",
            Disease::Parkinsons => "The person does not have Parkinson's disease",
        }
    }
}

impl Default for Disease {
    fn default() -> Self {
        Disease::Diabetes
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
