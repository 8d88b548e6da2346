use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a workable default: the service runs with zero
/// configuration on local loopback.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub model_id: String,
    pub rust_log: String,
}

/// The multilingual 1–5 star review model the endpoint serves by default.
pub const DEFAULT_MODEL_ID: &str = "nlptown/bert-base-multilingual-uncased-sentiment";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            model_id: std::env::var("MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
