//! # Application Configuration
//!
//! Configuration for the `sahayak-server`, loaded from environment
//! variables (with `.env` support in `main`). Every field has a default
//! except the Gemini API key, whose absence is a fatal startup error
//! raised when the provider is built.

use sahayak::constants::{
    DEFAULT_GEMINI_API_URL, DEFAULT_PROMPTS_DIR, DEFAULT_UPSTREAM_TIMEOUT_SECS,
};
use std::env;

/// The server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The port to listen on. Loaded from `PORT`.
    pub port: u16,
    /// Which AI provider to use: `gemini` or `local`. Loaded from `AI_PROVIDER`.
    pub ai_provider: String,
    /// The model API endpoint. Loaded from `GEMINI_API_URL`.
    pub ai_api_url: String,
    /// The API key. Loaded from `GEMINI_API_KEY`; required for the gemini provider.
    pub ai_api_key: Option<String>,
    /// Model name for the local provider. Loaded from `AI_MODEL`.
    pub ai_model: Option<String>,
    /// Directory holding the prompt template files. Loaded from `PROMPTS_DIR`.
    pub prompts_dir: String,
    /// Upstream call timeout in seconds. Loaded from `UPSTREAM_TIMEOUT_SECS`.
    pub upstream_timeout_secs: u64,
}

/// Reads the configuration from the environment.
pub fn get_config() -> Config {
    Config {
        port: env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(9090),
        ai_provider: env::var("AI_PROVIDER").unwrap_or_else(|_| "gemini".to_string()),
        ai_api_url: env::var("GEMINI_API_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
        ai_api_key: env::var("GEMINI_API_KEY").ok(),
        ai_model: env::var("AI_MODEL").ok(),
        prompts_dir: env::var("PROMPTS_DIR").unwrap_or_else(|_| DEFAULT_PROMPTS_DIR.to_string()),
        upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
    }
}
