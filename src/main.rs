//! Prediction of Disease Outbreaks System - server entry point
//!
//! Loads the three classifier artifacts, then serves the form pages and the
//! JSON API. Any artifact problem stops the process before it starts listening.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use disease_predict::{
    config::Config,
    create_router,
    inference::ModelRegistry,
    models::FormCatalog,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "disease_predict=debug,tower_http=debug".into());
    if config.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Disease prediction server starting...");
    tracing::info!("Model directory: {}", config.model_dir.display());

    let forms = FormCatalog::load(config.forms_file.as_deref()).map_err(|e| {
        tracing::error!("Startup failed: {}", e);
        e
    })?;

    let registry = ModelRegistry::load(&config, &forms).map_err(|e| {
        tracing::error!("Startup failed: {}", e);
        e
    })?;

    // Build application state
    let state = AppState {
        config: config.clone(),
        forms: Arc::new(forms),
        registry: Arc::new(registry),
    };

    let app = create_router(state);

    // Start server
    let ip = config.host.parse::<std::net::IpAddr>()
        .with_context(|| format!("invalid HOST '{}'", config.host))?;
    let addr = SocketAddr::from((ip, config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
