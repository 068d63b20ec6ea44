//! Form page handlers
//!
//! Each request renders from scratch. A `GET` always shows an empty form, so
//! moving to another view through the sidebar drops whatever was typed into
//! the previous one.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};

use super::resolve;
use crate::error::PredictError;
use crate::models::Disease;
use crate::validate::parse_features;
use crate::views::{self, Outcome};
use crate::{AppResult, AppState};

/// Default view
pub async fn index() -> Redirect {
    Redirect::to(&format!("/{}", Disease::default().slug()))
}

/// Empty form for one disease
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Html<String>> {
    let disease = resolve(&slug)?;
    let form = state.forms.get(disease);
    Ok(Html(views::page(disease, form, &HashMap::new(), None)))
}

/// Validate the submitted fields and run the disease's model
pub async fn submit(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(submitted): Form<HashMap<String, String>>,
) -> AppResult<Html<String>> {
    let disease = resolve(&slug)?;
    let form = state.forms.get(disease);
    let raw = form.gather(&submitted);

    let outcome = match parse_features(&form.labels(), &raw) {
        Err(e) => {
            tracing::debug!(disease = %disease, field = %e.label, "Rejected submission");
            Outcome::Error(e.to_string())
        }
        Ok(features) => match state.registry.predict(disease, &features) {
            Ok(prediction) => Outcome::Success(prediction.message.to_string()),
            Err(e @ PredictError::ArityMismatch { .. }) => Outcome::Error(e.to_string()),
            Err(PredictError::Model { .. }) => {
                Outcome::Error("Prediction failed, please try again.".to_string())
            }
        },
    };

    Ok(Html(views::page(disease, form, &submitted, Some(&outcome))))
}
