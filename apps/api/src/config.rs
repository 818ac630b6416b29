use anyhow::{Context, Result};

pub const DEFAULT_LLM_API_URL: &str = "https://api.aimlapi.com/v1";

/// Application configuration loaded from environment variables.
/// The LLM key is optional at startup; a missing key fails each gift request instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_api_key: Option<String>,
    pub llm_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            llm_api_key: optional_env("OPENAI_API_KEY"),
            llm_api_url: optional_env("LLM_API_URL")
                .unwrap_or_else(|| DEFAULT_LLM_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating empty or whitespace-only values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
