use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Separator between extra noise patterns in `NOISE_PATTERNS`.
pub const NOISE_PATTERN_SEPARATOR: &str = ";;";

/// Application configuration loaded from environment variables.
/// Startup fails if a present variable has an invalid value.
#[derive(Debug, Clone)]
pub struct Config {
    /// Enables AI analysis. Without it only the keyword analyzer runs.
    pub gemini_api_key: Option<String>,
    pub role_catalog_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
    /// Extra noise patterns appended to the segmenter's built-in table.
    pub extra_noise_patterns: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            role_catalog_path: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            extra_noise_patterns: Vec::new(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            gemini_api_key: lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()),
            role_catalog_path: lookup("ROLE_CATALOG_PATH").map(PathBuf::from),
            max_upload_bytes: match lookup("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .with_context(|| format!("MAX_UPLOAD_BYTES must be a byte count, got '{v}'"))?,
                None => defaults.max_upload_bytes,
            },
            extra_noise_patterns: lookup("NOISE_PATTERNS")
                .map(|v| {
                    v.split(NOISE_PATTERN_SEPARATOR)
                        .map(str::trim)
                        .filter(|p| !p.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            port: lookup("PORT")
                .unwrap_or_else(|| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}
