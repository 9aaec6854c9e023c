use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::extraction::ocr::{DEFAULT_DPI, DEFAULT_LANG};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Fixed location every upload is written to, overwritten each time.
    pub upload_path: PathBuf,
    pub ocr_dpi: u32,
    pub ocr_lang: String,
    /// Sessions untouched for this long are dropped.
    pub session_idle_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_path: std::env::var("UPLOAD_PATH")
                .unwrap_or_else(|_| "uploaded_resume.pdf".to_string())
                .into(),
            ocr_dpi: std::env::var("OCR_DPI")
                .unwrap_or_else(|_| DEFAULT_DPI.to_string())
                .parse::<u32>()
                .context("OCR_DPI must be a positive integer")?,
            ocr_lang: std::env::var("OCR_LANG").unwrap_or_else(|_| DEFAULT_LANG.to_string()),
            session_idle_minutes: std::env::var("SESSION_IDLE_MINUTES")
                .unwrap_or_else(|_| "60".to_string())
                .parse::<i64>()
                .context("SESSION_IDLE_MINUTES must be an integer")?,
        })
    }

    /// The credential handed to the remote analysis client.
    pub fn api_key(&self) -> &str {
        &self.gemini_api_key
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
impl Config {
    pub fn for_tests(upload_path: PathBuf) -> Self {
        Self {
            gemini_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            upload_path,
            ocr_dpi: DEFAULT_DPI,
            ocr_lang: DEFAULT_LANG.to_string(),
            session_idle_minutes: 60,
        }
    }
}
