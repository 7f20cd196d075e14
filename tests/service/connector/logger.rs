//! Tests for EventLogger::handle.
//!
//! Events are persisted when at least as severe as the configured threshold, anything with
//! an unknown level is dropped.

use heimdall::server::{
    config::ConnectorConfig,
    service::connector::logger::{ConnectorEvent, EventLogger, LogLevel},
};
use heimdall_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_table(entity::prelude::ConnectorLog)
        .build()
        .await
}

fn config(log_level: &str) -> ConnectorConfig {
    ConnectorConfig {
        log_level: log_level.to_string(),
        ..ConnectorConfig::default()
    }
}

fn event(level: &str) -> ConnectorEvent {
    ConnectorEvent {
        connector_type: "discord".to_string(),
        level: level.to_string(),
        category: "sync".to_string(),
        message: "Role update failed".to_string(),
    }
}

/// Tests a warning while the threshold is error.
///
/// Expected: Ok(false) and no log entry
#[tokio::test]
async fn drops_event_below_threshold() -> Result<(), TestError> {
    let test = setup().await?;

    let config = config("error");
    let logger = EventLogger::new(&test.db, &config);
    let result = logger.handle(&event("warning")).await;

    assert!(matches!(result, Ok(false)));
    let count = entity::prelude::ConnectorLog::find().count(&test.db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests an info event while the threshold is info.
///
/// Expected: Ok(true) and a log entry with the event's fields
#[tokio::test]
async fn persists_event_at_threshold() -> Result<(), TestError> {
    let test = setup().await?;

    let config = config("info");
    let logger = EventLogger::new(&test.db, &config);
    let result = logger.handle(&event("info")).await;

    assert!(matches!(result, Ok(true)));
    let logs = entity::prelude::ConnectorLog::find().all(&test.db).await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].connector_type, "discord");
    assert_eq!(logs[0].level, "info");
    assert_eq!(logs[0].category, "sync");
    assert_eq!(logs[0].message, "Role update failed");

    Ok(())
}

/// Tests an event more severe than the threshold.
///
/// Expected: Ok(true)
#[tokio::test]
async fn persists_event_above_threshold() -> Result<(), TestError> {
    let test = setup().await?;

    let config = config("error");
    let logger = EventLogger::new(&test.db, &config);
    let event = ConnectorEvent::new(
        "discord",
        LogLevel::Critical,
        "sync",
        "Bot token rejected".to_string(),
    );
    let result = logger.handle(&event).await;

    assert!(matches!(result, Ok(true)));

    Ok(())
}

/// Tests an event with an unknown level.
///
/// Expected: Ok(false) and no log entry
#[tokio::test]
async fn drops_unknown_event_level() -> Result<(), TestError> {
    let test = setup().await?;

    let config = config("debug");
    let logger = EventLogger::new(&test.db, &config);
    let result = logger.handle(&event("fatal")).await;

    assert!(matches!(result, Ok(false)));
    let count = entity::prelude::ConnectorLog::find().count(&test.db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests any event while the configured threshold is unknown.
///
/// Expected: Ok(false)
#[tokio::test]
async fn drops_everything_with_unknown_threshold() -> Result<(), TestError> {
    let test = setup().await?;

    let config = config("verbose");
    let logger = EventLogger::new(&test.db, &config);
    let result = logger.handle(&event("emergency")).await;

    assert!(matches!(result, Ok(false)));

    Ok(())
}

/// Tests error handling when the connector log table is missing.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let config = config("error");
    let logger = EventLogger::new(&test.db, &config);
    let result = logger.handle(&event("error")).await;

    assert!(result.is_err());

    Ok(())
}
