//! # API Configuration Module
//!
//! This module handles loading configuration for the appointment API server.
//! Values come from environment variables, with defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `APPOINTMENT_ID_STRATEGY`: `size` or `monotonic` (default: "size")

use doccal_store::IdStrategy;
use eyre::{bail, Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the appointment API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use doccal_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// How new appointments get their ids
    pub id_strategy: IdStrategy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: Level::INFO,
            cors_origins: None,
            request_timeout: 30,
            id_strategy: IdStrategy::CollectionSize,
        }
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - The APPOINTMENT_ID_STRATEGY value is not a known strategy
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .unwrap_or(30);

        let id_strategy = match lookup("APPOINTMENT_ID_STRATEGY")
            .unwrap_or_else(|| "size".to_string())
            .as_str()
        {
            "size" => IdStrategy::CollectionSize,
            "monotonic" => IdStrategy::Monotonic,
            other => bail!("Invalid APPOINTMENT_ID_STRATEGY value: {}", other),
        };

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            id_strategy,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:3000")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
