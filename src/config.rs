//! Configuration module

use std::env;
use std::path::PathBuf;

use crate::models::Disease;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the three classifier artifacts
    pub model_dir: PathBuf,

    /// Optional JSON file overriding form field order and labels
    pub forms_file: Option<PathBuf>,

    /// Listen address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Emit logs as JSON lines instead of human-readable text
    pub json_logs: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            model_dir: lookup("MODEL_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("models")),

            forms_file: lookup("FORMS_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),

            host: lookup("HOST")
                .unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            json_logs: lookup("LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    /// Full path of the artifact backing `disease`
    pub fn artifact_path(&self, disease: Disease) -> PathBuf {
        self.model_dir.join(disease.artifact_file())
    }
}
