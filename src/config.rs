//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LINKS_FILE="/var/lib/link-registry/links.json"
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="https://s.example.com"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `LINKS_FILE` - Path of the JSON links file (default: `links.json`)
//! - `STATIC_DIR` - Directory holding `index.html` (default: `static`)
//! - `BASE_URL` - Public origin used to render short URLs (default: `http://localhost:3000`)
//! - `CODE_MAX_ATTEMPTS` - Generated-code collision retries per create (default: 10, max: 100)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::application::services::DEFAULT_MAX_ATTEMPTS;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub links_file: PathBuf,
    pub static_dir: PathBuf,
    pub base_url: String,
    /// Upper bound on random code draws per create before giving up.
    pub code_max_attempts: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so this only fails on values that cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let links_file = env::var("LINKS_FILE").unwrap_or_else(|_| "links.json".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_max_attempts = match env::var("CODE_MAX_ATTEMPTS") {
            Ok(v) => v.parse().map_err(|_| {
                anyhow::anyhow!("CODE_MAX_ATTEMPTS must be a positive integer, got '{}'", v)
            })?,
            Err(_) => DEFAULT_MAX_ATTEMPTS,
        };

        Ok(Self {
            listen_addr,
            links_file: PathBuf::from(links_file),
            static_dir: PathBuf::from(static_dir),
            base_url,
            code_max_attempts,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `links_file` is empty
    /// - `base_url` is not an http(s) URL
    /// - `code_max_attempts` is outside 1..=100
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.links_file.as_os_str().is_empty() {
            anyhow::bail!("LINKS_FILE must not be empty");
        }

        match url::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => anyhow::bail!(
                "BASE_URL must be an http(s) URL, got '{}'",
                self.base_url
            ),
        }

        if self.code_max_attempts == 0 || self.code_max_attempts > 100 {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.code_max_attempts
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Links file: {}", self.links_file.display());
        tracing::info!("  Static dir: {}", self.static_dir.display());
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Code attempts: {}", self.code_max_attempts);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
