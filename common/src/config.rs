//! Application configuration.
//!
//! All configuration is read from environment variables once at startup
//! and never mutated afterwards.

use std::env;

use thiserror::Error;

/// Error raised when configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    /// An environment variable holds a value that cannot be parsed.
    #[error("invalid value for environment variable {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

/// Application configuration shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub host: String,

    /// Port the HTTP server binds to.
    pub port: u16,

    /// Static bearer token callers must present.
    pub bearer_token: String,

    /// Public URL of this server, advertised in the OpenAPI document.
    pub server_url: Option<String>,

    /// Connection settings for the backing ClickHouse instance.
    pub clickhouse: ClickHouseConfig,
}

/// ClickHouse HTTP interface connection settings.
#[derive(Debug, Clone)]
pub struct ClickHouseConfig {
    /// Base URL of the ClickHouse HTTP interface.
    pub url: String,

    /// Username for HTTP basic auth.
    pub username: String,

    /// Password for HTTP basic auth.
    pub password: String,

    /// Database selected for queries that do not override it.
    pub database: String,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingVar` if `API_BEARER_TOKEN` is not set,
    /// or `ConfigError::InvalidVar` if `SERVER_PORT` is not a valid port.
    pub fn load() -> Result<Self, ConfigError> {
        let bearer_token =
            env::var("API_BEARER_TOKEN").map_err(|_| ConfigError::MissingVar("API_BEARER_TOKEN"))?;

        let port = match env::var("SERVER_PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidVar {
                name: "SERVER_PORT",
                value,
            })?,
            Err(_) => 8000,
        };

        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            bearer_token,
            server_url: env::var("API_SERVER_URL").ok(),
            clickhouse: ClickHouseConfig::load(),
        })
    }
}

impl ClickHouseConfig {
    /// Loads ClickHouse settings from environment variables, falling back
    /// to the ClickHouse defaults for everything but the URL.
    pub fn load() -> Self {
        Self {
            url: env::var("CLICKHOUSE_URL").unwrap_or_else(|_| "http://localhost:8123".to_string()),
            username: env::var("CLICKHOUSE_USERNAME").unwrap_or_else(|_| "default".to_string()),
            password: env::var("CLICKHOUSE_PASSWORD").unwrap_or_default(),
            database: env::var("CLICKHOUSE_DATABASE").unwrap_or_else(|_| "default".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment is process-global, so every scenario lives in one test.
    #[test]
    fn test_load_from_env() {
        env::remove_var("API_BEARER_TOKEN");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::MissingVar("API_BEARER_TOKEN"))
        ));

        env::set_var("API_BEARER_TOKEN", "secret123");
        env::remove_var("SERVER_PORT");
        env::remove_var("CLICKHOUSE_URL");
        let config = AppConfig::load().unwrap();
        assert_eq!(config.bearer_token, "secret123");
        assert_eq!(config.port, 8000);
        assert_eq!(config.clickhouse.url, "http://localhost:8123");
        assert_eq!(config.clickhouse.username, "default");
        assert_eq!(config.clickhouse.database, "default");

        env::set_var("SERVER_PORT", "9090");
        env::set_var("CLICKHOUSE_URL", "http://ch:8123");
        env::set_var("CLICKHOUSE_DATABASE", "analytics");
        let config = AppConfig::load().unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.clickhouse.url, "http://ch:8123");
        assert_eq!(config.clickhouse.database, "analytics");

        env::set_var("SERVER_PORT", "not-a-port");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidVar { name: "SERVER_PORT", .. })
        ));

        env::remove_var("SERVER_PORT");
        env::remove_var("CLICKHOUSE_URL");
        env::remove_var("CLICKHOUSE_DATABASE");
        env::remove_var("API_BEARER_TOKEN");
    }
}
