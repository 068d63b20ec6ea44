//! JSON API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::resolve;
use crate::models::{Disease, FieldSpec, Prediction};
use crate::validate::parse_features;
use crate::{AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Values in the form's field order, as strings or JSON numbers
    pub values: Vec<serde_json::Value>,
}

/// Text handed to the validator. Values that are neither strings nor numbers
/// keep their JSON text, which never parses as a number.
fn raw_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[derive(Serialize)]
pub struct FormInfo<'a> {
    disease: Disease,
    slug: &'static str,
    title: &'static str,
    columns: usize,
    fields: &'a [FieldSpec],
}

/// List every form with its field order
pub async fn forms(State(state): State<AppState>) -> Json<serde_json::Value> {
    let forms: Vec<FormInfo> = state
        .forms
        .iter()
        .map(|(disease, form)| FormInfo {
            disease,
            slug: disease.slug(),
            title: disease.title(),
            columns: form.columns,
            fields: &form.fields,
        })
        .collect();

    Json(serde_json::json!({ "forms": forms }))
}

/// Validate and predict a single vector
pub async fn predict(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<PredictRequest>,
) -> AppResult<Json<Prediction>> {
    let disease = resolve(&slug)?;
    let form = state.forms.get(disease);

    let raw: Vec<String> = req.values.into_iter().map(raw_text).collect();
    let features = parse_features(&form.labels(), &raw)?;
    let prediction = state.registry.predict(disease, &features)?;

    Ok(Json(prediction))
}
