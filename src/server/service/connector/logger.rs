use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::ConnectorConfig, data::connector::log::ConnectorLogRepository, error::Error,
};

/// Severity of a connector event, ordered from least to most severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Detailed debug information
    Debug,
    /// Interesting events
    Info,
    /// Normal but significant events
    Notice,
    /// Exceptional occurrences that are not errors
    Warning,
    /// Runtime errors
    Error,
    /// Critical conditions
    Critical,
    /// Action must be taken immediately
    Alert,
    /// The connector is unusable
    Emergency,
}

impl LogLevel {
    /// Parses a lowercase level name, returning `None` for unknown levels.
    pub fn parse(level: &str) -> Option<Self> {
        match level {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "notice" => Some(Self::Notice),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            "critical" => Some(Self::Critical),
            "alert" => Some(Self::Alert),
            "emergency" => Some(Self::Emergency),
            _ => None,
        }
    }

    /// Numeric severity, higher is more severe.
    pub fn severity(self) -> u16 {
        match self {
            Self::Debug => 100,
            Self::Info => 200,
            Self::Notice => 250,
            Self::Warning => 300,
            Self::Error => 400,
            Self::Critical => 500,
            Self::Alert => 550,
            Self::Emergency => 600,
        }
    }

    /// Lowercase level name as stored in the connector log.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::Alert => "alert",
            Self::Emergency => "emergency",
        }
    }
}

/// Event raised by a connector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectorEvent {
    /// Connector that raised the event
    pub connector_type: String,
    /// Lowercase level name, see [`LogLevel::parse`]
    pub level: String,
    /// Free-form grouping, e.g. `sync` or `user`
    pub category: String,
    /// Human readable description
    pub message: String,
}

impl ConnectorEvent {
    /// Creates an event with a known level.
    pub fn new(connector_type: &str, level: LogLevel, category: &str, message: String) -> Self {
        Self {
            connector_type: connector_type.to_string(),
            level: level.as_str().to_string(),
            category: category.to_string(),
            message,
        }
    }
}

/// Persists connector events meeting the configured level threshold.
pub struct EventLogger<'a> {
    db: &'a DatabaseConnection,
    config: &'a ConnectorConfig,
}

impl<'a> EventLogger<'a> {
    /// Creates a new instance of [`EventLogger`]
    pub fn new(db: &'a DatabaseConnection, config: &'a ConnectorConfig) -> Self {
        Self { db, config }
    }

    /// Handles a connector event.
    ///
    /// Events with an unknown level, or any event while the configured threshold is unknown,
    /// are dropped silently. Recognized events are written to the process log and persisted
    /// to the connector log when at least as severe as the threshold.
    ///
    /// # Returns
    /// - `Ok(true)` - The event was persisted
    /// - `Ok(false)` - The event was dropped
    /// - `Err(Error::DbErr)` - Inserting the log entry failed
    pub async fn handle(&self, event: &ConnectorEvent) -> Result<bool, Error> {
        let Some(level) = LogLevel::parse(&event.level) else {
            return Ok(false);
        };
        let Some(threshold) = LogLevel::parse(&self.config.log_level) else {
            return Ok(false);
        };

        trace_event(level, event);

        if level.severity() < threshold.severity() {
            return Ok(false);
        }

        let log_repo = ConnectorLogRepository::new(self.db);
        log_repo
            .create(
                &event.connector_type,
                level.as_str(),
                &event.category,
                &event.message,
            )
            .await?;

        Ok(true)
    }
}

fn trace_event(level: LogLevel, event: &ConnectorEvent) {
    match level {
        LogLevel::Debug => tracing::debug!(
            "[{}] {}: {}",
            event.connector_type,
            event.category,
            event.message
        ),
        LogLevel::Info | LogLevel::Notice => tracing::info!(
            "[{}] {}: {}",
            event.connector_type,
            event.category,
            event.message
        ),
        LogLevel::Warning => tracing::warn!(
            "[{}] {}: {}",
            event.connector_type,
            event.category,
            event.message
        ),
        _ => tracing::error!(
            "[{}] {}: {}",
            event.connector_type,
            event.category,
            event.message
        ),
    }
}
