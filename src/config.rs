//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fixed delay simulated for image analysis
    pub analysis_delay: Duration,
    /// Pin catalog listings to fixture order instead of shuffling
    pub deterministic_order: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            analysis_delay: Duration::from_secs(2),
            deterministic_order: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let analysis_delay_ms: u64 = env::var("WISEBITES_ANALYSIS_DELAY_MS")
            .unwrap_or_else(|_| "2000".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("WISEBITES_ANALYSIS_DELAY_MS"))?;

        let deterministic_order = env::var("WISEBITES_DETERMINISTIC_ORDER")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            analysis_delay: Duration::from_millis(analysis_delay_ms),
            deterministic_order,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
