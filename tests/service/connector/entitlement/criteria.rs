//! Tests for each membership criterion of a set.

use std::collections::BTreeSet;

use super::*;

fn set_of(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

/// Tests a set granted directly to the user.
///
/// Expected: Ok with the set
#[tokio::test]
async fn grants_user_sets() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_mock_character(1, 98000001, None)
        .await?;
    let set = test.connector().insert_set("discord", "direct", false).await?;
    test.connector()
        .insert_set_entity(set.id, SetEntityType::User, user.id as i64)
        .await?;
    let other = test.connector().insert_set("discord", "other", false).await?;
    test.connector()
        .insert_set_entity(other.id, SetEntityType::User, user.id as i64 + 1)
        .await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = strict();
    let mut resolver = EntitlementResolver::new(&test.db, &config);
    let result = resolver.resolve_entitlements(&linked_user).await;
    assert!(result.is_ok());
    let result = result.unwrap();

    assert_eq!(result, set_of(&["direct"]));

    Ok(())
}

/// Tests a set granted to a role held by the user.
///
/// Expected: Ok with the set
#[tokio::test]
async fn grants_role_sets() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_mock_character(1, 98000001, None)
        .await?;
    let role = test.user().insert_role("Fleet Commander").await?;
    test.user().insert_user_role(user.id, role.id).await?;
    let set = test.connector().insert_set("discord", "fc", false).await?;
    test.connector()
        .insert_set_entity(set.id, SetEntityType::Role, role.id as i64)
        .await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = strict();
    let mut resolver = EntitlementResolver::new(&test.db, &config);
    let result = resolver.resolve_entitlements(&linked_user).await;
    assert!(result.is_ok());
    let result = result.unwrap();

    assert_eq!(result, set_of(&["fc"]));

    Ok(())
}

/// Tests a set granted to a squad the user is a member of.
///
/// Expected: Ok with the set
#[tokio::test]
async fn grants_squad_sets() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_mock_character(1, 98000001, None)
        .await?;
    let squad = test.user().insert_squad("Capitals").await?;
    test.user().insert_squad_member(squad.id, user.id).await?;
    let set = test.connector().insert_set("discord", "caps", false).await?;
    test.connector()
        .insert_set_entity(set.id, SetEntityType::Squad, squad.id as i64)
        .await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = strict();
    let mut resolver = EntitlementResolver::new(&test.db, &config);
    let result = resolver.resolve_entitlements(&linked_user).await;
    assert!(result.is_ok());
    let result = result.unwrap();

    assert_eq!(result, set_of(&["caps"]));

    Ok(())
}

/// Tests a set granted to a title held by one of the user's characters.
///
/// Titles of every character are considered, not only the main character's.
///
/// Expected: Ok with the set
#[tokio::test]
async fn grants_title_sets_of_any_character() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_mock_character(1, 98000001, None)
        .await?;
    let (_, alt) = test
        .user()
        .insert_mock_character_for_user(user.id, 2, 98000002, None, true)
        .await?;
    let director = test.eve().insert_mock_title(98000002, 1, "Director").await?;
    test.eve().insert_character_title(alt.id, director.id).await?;
    let set = test.connector().insert_set("discord", "directors", false).await?;
    test.connector()
        .insert_set_entity(set.id, SetEntityType::Title, director.id as i64)
        .await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = strict();
    let mut resolver = EntitlementResolver::new(&test.db, &config);
    let result = resolver.resolve_entitlements(&linked_user).await;
    assert!(result.is_ok());
    let result = result.unwrap();

    assert_eq!(result, set_of(&["directors"]));

    Ok(())
}

/// Tests a set matched by titles of two characters and by their alliance.
///
/// Expected: Ok with the set listed once next to the public set
#[tokio::test]
async fn merges_titles_of_several_characters() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, main) = test
        .user()
        .insert_user_with_mock_character(1, 98000001, Some(99000001))
        .await?;
    let (_, alt) = test
        .user()
        .insert_mock_character_for_user(user.id, 2, 98000002, Some(99000001), true)
        .await?;
    let director = test.eve().insert_mock_title(98000001, 1, "Director").await?;
    let officer = test.eve().insert_mock_title(98000002, 1, "Officer").await?;
    test.eve().insert_character_title(main.id, director.id).await?;
    test.eve().insert_character_title(alt.id, officer.id).await?;
    let set = test.connector().insert_set("discord", "command", false).await?;
    test.connector()
        .insert_set_entity(set.id, SetEntityType::Title, director.id as i64)
        .await?;
    test.connector()
        .insert_set_entity(set.id, SetEntityType::Title, officer.id as i64)
        .await?;
    test.connector()
        .insert_set_entity(set.id, SetEntityType::Alliance, 99000001)
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

    assert_eq!(result, set_of(&["command", "public"]));

    Ok(())
}

/// Tests that characters outside of any alliance never match an alliance criterion.
///
/// Expected: Ok with an empty set
#[tokio::test]
async fn character_without_alliance_matches_no_alliance_set() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_mock_character(1, 98000001, None)
        .await?;
    let set = test.connector().insert_set("discord", "alliance", false).await?;
    test.connector()
        .insert_set_entity(set.id, SetEntityType::Alliance, 99000001)
        .await?;
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

/// Tests that public sets are granted without matching any criterion.
///
/// Expected: Ok with only the public set of the connector type
#[tokio::test]
async fn always_grants_public_sets() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_mock_character(1, 98000001, None)
        .await?;
    test.connector().insert_set("discord", "public", true).await?;
    test.connector().insert_set("discord", "private", false).await?;
    test.connector().insert_set("teamspeak", "other", true).await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = strict();
    let mut resolver = EntitlementResolver::new(&test.db, &config);
    let result = resolver.resolve_entitlements(&linked_user).await;
    assert!(result.is_ok());
    let result = result.unwrap();

    assert_eq!(result, set_of(&["public"]));

    Ok(())
}

/// Tests a set matched through several overlapping criteria.
///
/// Expected: Ok with the set listed once
#[tokio::test]
async fn deduplicates_overlapping_criteria() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_mock_character(1, 98000001, Some(99000001))
        .await?;
    let set = test.connector().insert_set("discord", "members", true).await?;
    test.connector()
        .insert_set_entity(set.id, SetEntityType::User, user.id as i64)
        .await?;
    test.connector()
        .insert_set_entity(set.id, SetEntityType::Corporation, 98000001)
        .await?;
    test.connector()
        .insert_set_entity(set.id, SetEntityType::Alliance, 99000001)
        .await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = strict();
    let mut resolver = EntitlementResolver::new(&test.db, &config);
    let result = resolver.resolve_entitlements(&linked_user).await;
    assert!(result.is_ok());
    let result = result.unwrap();

    assert_eq!(result, set_of(&["members"]));

    Ok(())
}

/// Tests is_entitled against the resolved sets.
///
/// Expected: true for a granted set, false for any other
#[tokio::test]
async fn is_entitled_checks_resolved_sets() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_mock_character(1, 98000001, None)
        .await?;
    let set = test.connector().insert_set("discord", "corp", false).await?;
    test.connector()
        .insert_set_entity(set.id, SetEntityType::Corporation, 98000001)
        .await?;
    let linked_user = test
        .connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let config = strict();
    let mut resolver = EntitlementResolver::new(&test.db, &config);

    let granted = resolver.is_entitled(&linked_user, "corp").await;
    let other = resolver.is_entitled(&linked_user, "other").await;

    assert!(matches!(granted, Ok(true)));
    assert!(matches!(other, Ok(false)));

    Ok(())
}
