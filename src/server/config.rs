//! Application configuration loaded from environment variables.

use crate::server::error::config::ConfigError;

/// Default nickname template, `[CORP] Character Name`.
pub static DEFAULT_NICKNAME_FORMAT: &str = "[%2$s] %1$s";

/// Default minimum level of connector events persisted to the database.
pub static DEFAULT_LOG_LEVEL: &str = "error";

static DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:8080";

/// Server configuration.
pub struct Config {
    /// Database connection URL, `DATABASE_URL`
    pub database_url: String,
    /// Address the HTTP server binds to, `LISTEN_ADDRESS`
    pub listen_address: String,
    /// Connector settings
    pub connector: ConnectorConfig,
}

/// Settings shared by every connector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectorConfig {
    /// Require every character of a user to hold a valid refresh token before any set is granted.
    pub strict_mode: bool,
    /// Include corporation and alliance tickers in nicknames.
    pub nickname_ticker: bool,
    /// Positional template used to build nicknames, `%1$s` is the character name,
    /// `%2$s` the corporation ticker and `%3$s` the alliance ticker.
    pub nickname_format: String,
    /// Minimum level of connector events persisted to the database.
    pub log_level: String,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            strict_mode: true,
            nickname_ticker: true,
            nickname_format: DEFAULT_NICKNAME_FORMAT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration from environment variables.
    ///
    /// # Errors
    /// - `ConfigError::MissingEnvVar` - `DATABASE_URL` is not set
    /// - `ConfigError::InvalidEnvValue` - A boolean setting cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            listen_address: std::env::var("LISTEN_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDRESS.to_string()),
            connector: ConnectorConfig::from_env()?,
        })
    }
}

impl ConnectorConfig {
    /// Reads the `CONNECTOR_*` settings, falling back to [`ConnectorConfig::default`] for
    /// each variable that is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let default = Self::default();

        Ok(Self {
            strict_mode: bool_var("CONNECTOR_STRICT", default.strict_mode)?,
            nickname_ticker: bool_var("CONNECTOR_TICKER", default.nickname_ticker)?,
            nickname_format: std::env::var("CONNECTOR_FORMAT")
                .ok()
                .filter(|format| !format.is_empty())
                .unwrap_or(default.nickname_format),
            log_level: std::env::var("CONNECTOR_LOG_LEVEL")
                .map(|level| level.to_lowercase())
                .unwrap_or(default.log_level),
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn bool_var(var: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(var) {
        Ok(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a boolean, got {:?}", value),
        }),
        Err(std::env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
