use crate::i18n::Language;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    // Authentication API
    pub api_url: String,
    pub http_timeout: Duration,

    // Persisted storage
    pub storage_path: PathBuf,

    // Localization
    pub default_language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Authentication API
            api_url: std::env::var("IMPACT_API_URL").context("IMPACT_API_URL not set")?,
            http_timeout: Duration::from_secs(
                std::env::var("IMPACT_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),

            // Persisted storage
            storage_path: std::env::var("IMPACT_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/client-storage.json")),

            // Localization
            default_language: match std::env::var("IMPACT_DEFAULT_LANGUAGE") {
                Ok(code) => Language::from_code(&code).unwrap_or_else(|e| {
                    let fallback = Language::default_language();
                    warn!("IMPACT_DEFAULT_LANGUAGE: {}; using '{}'", e, fallback);
                    fallback
                }),
                Err(_) => Language::default_language(),
            },
        })
    }
}
