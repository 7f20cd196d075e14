//! Tests for NicknameService::build_nickname.

use heimdall::server::{config::ConnectorConfig, service::connector::nickname::NicknameService};
use heimdall_test_utils::prelude::*;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_user_tables()
        .with_connector_tables()
        .build()
        .await
}

/// Tests the default format with corporation ticker.
///
/// Expected: `[F4LL.] Character 1`
#[tokio::test]
async fn formats_main_character_with_ticker() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_mock_character(1, 98000001, Some(99000001))
        .await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = ConnectorConfig::default();
    let result = NicknameService::new(&test.db, &config)
        .build_nickname(&linked_user)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "[F4LL.] Character 1");

    Ok(())
}

/// Tests a custom format using the alliance ticker.
///
/// Expected: `AUTMN | F4LL. | Character 1`
#[tokio::test]
async fn applies_custom_format() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_mock_character(1, 98000001, Some(99000001))
        .await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = ConnectorConfig {
        nickname_format: "%3$s | %2$s | %1$s".to_string(),
        ..ConnectorConfig::default()
    };
    let result = NicknameService::new(&test.db, &config)
        .build_nickname(&linked_user)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "AUTMN | F4LL. | Character 1");

    Ok(())
}

/// Tests disabled tickers.
///
/// Expected: the bare character name
#[tokio::test]
async fn uses_character_name_without_ticker() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_mock_character(1, 98000001, None)
        .await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = ConnectorConfig {
        nickname_ticker: false,
        ..ConnectorConfig::default()
    };
    let result = NicknameService::new(&test.db, &config)
        .build_nickname(&linked_user)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "Character 1");

    Ok(())
}

/// Tests a user without a main character.
///
/// The credentialed character with the lowest record ID is used, characters with a revoked
/// token are skipped.
///
/// Expected: the name of the first credentialed character
#[tokio::test]
async fn falls_back_to_first_credentialed_character() -> Result<(), TestError> {
    let test = setup().await?;
    let user = test.user().insert_user(None, true).await?;
    test.user()
        .insert_mock_character_for_user(user.id, 1, 98000001, None, false)
        .await?;
    test.user()
        .insert_mock_character_for_user(user.id, 2, 98000001, None, true)
        .await?;
    test.user()
        .insert_mock_character_for_user(user.id, 3, 98000001, None, true)
        .await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = ConnectorConfig {
        nickname_ticker: false,
        ..ConnectorConfig::default()
    };
    let result = NicknameService::new(&test.db, &config)
        .build_nickname(&linked_user)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "Character 2");

    Ok(())
}

/// Tests a user without any character.
///
/// Expected: the user's account name
#[tokio::test]
async fn falls_back_to_user_name() -> Result<(), TestError> {
    let test = setup().await?;
    let user = test.user().insert_user(None, true).await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = ConnectorConfig::default();
    let result = NicknameService::new(&test.db, &config)
        .build_nickname(&linked_user)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "Test User");

    Ok(())
}

/// Tests an empty format.
///
/// Expected: the default `[corporation] name` format
#[tokio::test]
async fn empty_format_uses_default() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_mock_character(1, 98000001, None)
        .await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = ConnectorConfig {
        nickname_format: String::new(),
        ..ConnectorConfig::default()
    };
    let result = NicknameService::new(&test.db, &config)
        .build_nickname(&linked_user)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "[F4LL.] Character 1");

    Ok(())
}
