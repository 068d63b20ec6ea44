//! Prediction of Disease Outbreaks System
//!
//! Web forms in front of three pre-trained binary classifiers (diabetes,
//! heart disease, Parkinson's).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    DISEASE PREDICT                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌─────────────┐   ┌──────────────────────┐  │
//! │  │  Pages /  │──▶│  Validator  │──▶│  Model Registry      │  │
//! │  │  JSON API │   │  (parse)    │   │  (arity + predict)   │  │
//! │  │  (Axum)   │   └─────────────┘   └──────────┬───────────┘  │
//! │  └───────────┘                                ▼              │
//! │                                     ┌──────────────────────┐ │
//! │                                     │ ONNX artifacts (ort) │ │
//! │                                     └──────────────────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod inference;
pub mod models;
pub mod validate;
pub mod views;

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use error::{AppError, AppResult};

use crate::config::Config;
use crate::inference::ModelRegistry;
use crate::models::FormCatalog;

/// Shared application state. Everything in it is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub forms: Arc<FormCatalog>,
    pub registry: Arc<ModelRegistry>,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    // Browser pages
    let page_routes = Router::new()
        .route("/", get(handlers::pages::index))
        .route("/health", get(handlers::health::check))
        .route("/:disease", get(handlers::pages::show).post(handlers::pages::submit));

    // JSON API
    let api_routes = Router::new()
        .route("/api/v1/forms", get(handlers::api::forms))
        .route("/api/v1/predict/:disease", axum::routing::post(handlers::api::predict))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        );

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::inference::classifier::testing::RecordingClassifier;
    use crate::inference::Classifier;
    use crate::models::{Disease, Label};

    pub struct Fixture {
        pub state: AppState,
        pub diabetes: Arc<RecordingClassifier>,
        pub heart: Arc<RecordingClassifier>,
        pub parkinsons: Arc<RecordingClassifier>,
    }

    /// State with recording classifiers sized to the default forms
    pub fn fixture(answer: Label) -> Fixture {
        let diabetes = Arc::new(RecordingClassifier::new(8, answer));
        let heart = Arc::new(RecordingClassifier::new(13, answer));
        let parkinsons = Arc::new(RecordingClassifier::new(23, answer));

        let forms = FormCatalog::default();
        let classifiers: Vec<(Disease, Arc<dyn Classifier>)> = vec![
            (Disease::Diabetes, diabetes.clone() as Arc<dyn Classifier>),
            (Disease::HeartDisease, heart.clone() as Arc<dyn Classifier>),
            (Disease::Parkinsons, parkinsons.clone() as Arc<dyn Classifier>),
        ];
        let registry = ModelRegistry::from_classifiers(classifiers, &forms);

        Fixture {
            state: AppState {
                config: Config::from_lookup(|_| None),
                forms: Arc::new(forms),
                registry: Arc::new(registry),
            },
            diabetes,
            heart,
            parkinsons,
        }
    }

    pub async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}
