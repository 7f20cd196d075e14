//! Tests for the gating applied before any set is resolved.

use std::collections::BTreeSet;

use heimdall::server::error::Error;
use sea_orm::{DbErr, EntityTrait};

use super::*;

/// Tests a user without any character.
///
/// A user without characters has no refresh token and is denied every set, including
/// public sets.
///
/// Expected: Ok with an empty set
#[tokio::test]
async fn denies_user_without_characters() -> Result<(), TestError> {
    let test = setup().await?;
    let user = test.user().insert_user(None, true).await?;
    test.connector().insert_set("discord", "public", true).await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = permissive();
    let mut resolver = EntitlementResolver::new(&test.db, &config);
    let result = resolver.resolve_entitlements(&linked_user).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}

/// Tests a user whose only refresh token was revoked.
///
/// Expected: Ok with an empty set
#[tokio::test]
async fn denies_user_with_only_revoked_tokens() -> Result<(), TestError> {
    let test = setup().await?;
    let user = test.user().insert_user(None, true).await?;
    test.user()
        .insert_mock_character_for_user(user.id, 1, 98000001, None, false)
        .await?;
    let set = test.connector().insert_set("discord", "s1", false).await?;
    test.connector()
        .insert_set_entity(set.id, SetEntityType::User, user.id as i64)
        .await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = permissive();
    let mut resolver = EntitlementResolver::new(&test.db, &config);
    let result = resolver.resolve_entitlements(&linked_user).await;
    assert!(result.is_ok());
    let result = result.unwrap();

    assert!(result.is_empty());

    Ok(())
}

/// Tests an inactive account with valid credentials.
///
/// Expected: Ok with an empty set
#[tokio::test]
async fn denies_inactive_user() -> Result<(), TestError> {
    let test = setup().await?;
    let user = test.user().insert_user(None, false).await?;
    test.user()
        .insert_mock_character_for_user(user.id, 1, 98000001, None, true)
        .await?;
    test.connector().insert_set("discord", "public", true).await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = strict();
    let mut resolver = EntitlementResolver::new(&test.db, &config);
    let result = resolver.resolve_entitlements(&linked_user).await;
    assert!(result.is_ok());
    let result = result.unwrap();

    assert!(result.is_empty());

    Ok(())
}

/// Tests strict mode toggling for a user with one revoked token out of two characters.
///
/// Strict mode denies the user every set while permissive mode resolves the criteria of the
/// credentialed character.
///
/// Expected: empty set in strict mode, `{"s1", "public"}` in permissive mode
#[tokio::test]
async fn strict_mode_requires_every_token() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_mock_character(1, 100, None)
        .await?;
    test.user()
        .insert_mock_character_for_user(user.id, 2, 200, None, false)
        .await?;
    let s1 = test.connector().insert_set("discord", "s1", false).await?;
    test.connector()
        .insert_set_entity(s1.id, SetEntityType::Corporation, 100)
        .await?;
    let s2 = test.connector().insert_set("discord", "s2", false).await?;
    test.connector()
        .insert_set_entity(s2.id, SetEntityType::Corporation, 200)
        .await?;
    test.connector().insert_set("discord", "public", true).await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let strict_config = strict();
    let mut strict_resolver = EntitlementResolver::new(&test.db, &strict_config);
    let strict_result = strict_resolver.resolve_entitlements(&linked_user).await;
    assert!(strict_result.is_ok());
    let strict_result = strict_result.unwrap();

    assert!(strict_result.is_empty());

    let permissive_config = permissive();
    let mut permissive_resolver = EntitlementResolver::new(&test.db, &permissive_config);
    let permissive_result = permissive_resolver
        .resolve_entitlements(&linked_user)
        .await;
    assert!(permissive_result.is_ok());
    let permissive_result = permissive_result.unwrap();

    let expected: BTreeSet<String> = ["s1", "public"].into_iter().map(String::from).collect();
    assert_eq!(permissive_result, expected);

    Ok(())
}

/// Tests a linked user whose user was deleted after the binding was loaded.
///
/// Expected: Err with DbErr::RecordNotFound
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = setup().await?;
    let user = test.user().insert_user(None, true).await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;
    entity::prelude::HeimdallUser::delete_by_id(user.id)
        .exec(&test.db)
        .await?;

    let config = strict();
    let mut resolver = EntitlementResolver::new(&test.db, &config);
    let result = resolver.resolve_entitlements(&linked_user).await;

    assert!(matches!(
        result,
        Err(Error::DbErr(DbErr::RecordNotFound(_)))
    ));

    Ok(())
}
