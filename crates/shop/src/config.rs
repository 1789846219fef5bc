//! Shop configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MARKET_API_ORIGIN` - Catalog API origin (default: `http://127.0.0.1:8000`)

use thiserror::Error;
use url::Url;

/// Default catalog API origin, a local development server.
const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:8000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shop application configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Catalog API origin, normalized without a trailing slash.
    pub api_origin: String,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `MARKET_API_ORIGIN` is set but is not a
    /// valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let origin = get_env_or_default("MARKET_API_ORIGIN", DEFAULT_API_ORIGIN);
        Self::with_origin(&origin)
    }

    /// Build a configuration for an explicit API origin.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the origin is not a valid URL.
    pub fn with_origin(origin: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(origin).map_err(|e| {
            ConfigError::InvalidEnvVar("MARKET_API_ORIGIN".to_string(), e.to_string())
        })?;

        Ok(Self {
            api_origin: url.as_str().trim_end_matches('/').to_string(),
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
