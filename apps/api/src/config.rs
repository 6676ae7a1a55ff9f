use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Remote text-extraction service. `None` means extract PDFs in-process.
    pub pdf_service_url: Option<String>,
    /// Attempts per LLM call. 1 disables retry.
    pub llm_max_attempts: u32,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            pdf_service_url: optional_env("PDF_SERVICE_URL"),
            llm_max_attempts: parse_env("LLM_MAX_ATTEMPTS", 1)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
