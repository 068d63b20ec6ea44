//! Prediction result model

use serde::Serialize;

use super::Disease;

/// Binary classifier output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    /// Map a raw class id; anything other than 0/1 is rejected
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Label::Negative),
            1 => Some(Label::Positive),
            _ => None,
        }
    }

    pub fn as_class(self) -> u8 {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
        }
    }
}

/// Outcome of one prediction, shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub disease: Disease,
    pub label: u8,
    pub positive: bool,
    pub message: &'static str,
}

impl Prediction {
    pub fn new(disease: Disease, label: Label) -> Self {
        let message = match label {
            Label::Positive => disease.positive_message(),
            Label::Negative => disease.negative_message(),
        };

        Self {
            disease,
            label: label.as_class(),
            positive: label == Label::Positive,
            message,
        }
    }
}
