use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Gemini model used for both extraction and liveness calls.
/// Pinned to a specific version; deliberately not env-overridable.
pub const GEMINI_MODEL: &str = "gemini-1.5-flash-001";

#[derive(Debug, Clone, Deserialize)]
pub struct IdverifyConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub google: GoogleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    /// Vertex AI project id.
    pub project_id: String,
    /// Vertex AI region, e.g. us-central1.
    pub location: String,
    /// Express-mode API key for the Vertex AI REST endpoint.
    pub api_key: String,
}

impl IdverifyConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(IdverifyConfig {
            common,
            google: GoogleConfig {
                project_id: get_env("GOOGLE_CLOUD_PROJECT", None, is_prod)?,
                location: get_env("GOOGLE_CLOUD_LOCATION", Some("us-central1"), is_prod)?,
                api_key: get_env("GOOGLE_API_KEY", None, is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
