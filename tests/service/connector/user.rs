//! Tests for ConnectorUserService.

use heimdall::server::{
    config::ConnectorConfig,
    service::connector::user::{ConnectorAccount, ConnectorUserService},
};
use heimdall_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_user_tables()
        .with_connector_tables()
        .build()
        .await
}

fn account(connector_id: &str) -> ConnectorAccount {
    ConnectorAccount {
        connector_id: connector_id.to_string(),
        connector_name: format!("Account {}", connector_id),
        unique_id: connector_id.to_string(),
    }
}

/// Tests linking the same user twice on a connector.
///
/// Expected: a single binding holding the second account
#[tokio::test]
async fn relinking_updates_existing_binding() -> Result<(), TestError> {
    let test = setup().await?;
    let user = test.user().insert_user(None, true).await?;

    let config = ConnectorConfig::default();
    let service = ConnectorUserService::new(&test.db, &config);
    let first = service.link_user("discord", user.id, &account("111")).await;
    let second = service.link_user("discord", user.id, &account("222")).await;

    assert!(first.is_ok());
    assert!(second.is_ok());
    let (first, second) = (first.unwrap(), second.unwrap());
    assert_eq!(first.id, second.id);
    assert_eq!(second.connector_id, "222");
    let count = entity::prelude::ConnectorUser::find().count(&test.db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests linking a user on two connectors.
///
/// Expected: one binding per connector
#[tokio::test]
async fn links_each_connector_separately() -> Result<(), TestError> {
    let test = setup().await?;
    let user = test.user().insert_user(None, true).await?;

    let config = ConnectorConfig::default();
    let service = ConnectorUserService::new(&test.db, &config);
    let discord = service.link_user("discord", user.id, &account("111")).await;
    let teamspeak = service
        .link_user("teamspeak", user.id, &account("abc"))
        .await;
    assert!(discord.is_ok());
    assert!(teamspeak.is_ok());

    let discord_users = service.list(Some("discord")).await;
    let teamspeak_users = service.list(Some("teamspeak")).await;
    assert!(matches!(discord_users, Ok(ref users) if users.len() == 1));
    assert!(matches!(teamspeak_users, Ok(ref users) if users.len() == 1));

    Ok(())
}

/// Tests that linking is recorded in the connector log when the threshold allows it.
///
/// Expected: one info entry
#[tokio::test]
async fn records_link_in_connector_log() -> Result<(), TestError> {
    let test = setup().await?;
    let user = test.user().insert_user(None, true).await?;

    let config = ConnectorConfig {
        log_level: "info".to_string(),
        ..ConnectorConfig::default()
    };
    let service = ConnectorUserService::new(&test.db, &config);
    let result = service.link_user("discord", user.id, &account("111")).await;
    assert!(result.is_ok());

    let logs = entity::prelude::ConnectorLog::find().all(&test.db).await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].level, "info");
    assert_eq!(logs[0].category, "user");

    Ok(())
}

/// Tests unlinking an existing and a missing binding.
///
/// Expected: true the first time, false afterwards
#[tokio::test]
async fn unlink_reports_removal() -> Result<(), TestError> {
    let test = setup().await?;
    let user = test.user().insert_user(None, true).await?;
    test.connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = ConnectorConfig::default();
    let service = ConnectorUserService::new(&test.db, &config);

    let first = service.unlink("discord", user.id).await;
    let second = service.unlink("discord", user.id).await;
    let binding = service.get("discord", user.id).await;

    assert!(matches!(first, Ok(true)));
    assert!(matches!(second, Ok(false)));
    assert!(matches!(binding, Ok(None)));

    Ok(())
}

/// Tests listing without a connector type.
///
/// Expected: Ok with no bindings
#[tokio::test]
async fn list_without_connector_type_is_empty() -> Result<(), TestError> {
    let test = setup().await?;
    let user = test.user().insert_user(None, true).await?;
    test.connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = ConnectorConfig::default();
    let service = ConnectorUserService::new(&test.db, &config);
    let result = service.list(None).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}

/// Tests linking and unlinking while the connector log cannot be written.
///
/// Expected: both operations succeed and the binding is stored
#[tokio::test]
async fn link_survives_log_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::ConnectorUser)
        .build()
        .await?;
    let user = test.user().insert_user(None, true).await?;

    let config = ConnectorConfig {
        log_level: "info".to_string(),
        ..ConnectorConfig::default()
    };
    let service = ConnectorUserService::new(&test.db, &config);
    let linked = service.link_user("discord", user.id, &account("111")).await;

    assert!(matches!(linked, Ok(ref binding) if binding.connector_id == "111"));
    let count = entity::prelude::ConnectorUser::find().count(&test.db).await?;
    assert_eq!(count, 1);

    let unlinked = service.unlink("discord", user.id).await;
    assert!(matches!(unlinked, Ok(true)));

    Ok(())
}
