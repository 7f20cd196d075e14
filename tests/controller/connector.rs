//! Tests for the connector endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use heimdall::{
    model::connector::{ConnectorUserDto, ConnectorUserSetsDto, LinkUserDto},
    server::controller::connector::{
        get_user_sets, link_user, list_users, unlink_user, ListUsersParams,
    },
};

use super::*;

/// Tests the sets and nickname of a linked user.
///
/// Expected: 200 OK with the entitled sets in order and the formatted nickname
#[tokio::test]
async fn returns_sets_and_nickname() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_mock_character(1, 98000001, None)
        .await?;
    let corp = test.connector().insert_set("discord", "corp", false).await?;
    test.connector()
        .insert_set_entity(corp.id, SetEntityType::Corporation, 98000001)
        .await?;
    test.connector().insert_set("discord", "announcements", true).await?;
    test.connector()
        .insert_connector_user("discord", user.id)
        .await?;

    let result = get_user_sets(
        State(test.app_state::<AppState>()),
        Path(("discord".to_string(), user.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ConnectorUserSetsDto = read_json(resp).await;
    assert_eq!(body.sets, vec!["announcements".to_string(), "corp".to_string()]);
    assert_eq!(body.nickname, "[F4LL.] Character 1");
    assert_eq!(body.connector_id, format!("discord-{}", user.id));

    Ok(())
}

/// Tests the sets of a user not linked on the connector.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn sets_of_unlinked_user_not_found() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_mock_character(1, 98000001, None)
        .await?;
    test.connector()
        .insert_connector_user("teamspeak", user.id)
        .await?;

    let result = get_user_sets(
        State(test.app_state::<AppState>()),
        Path(("discord".to_string(), user.id)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests listing linked users of a driver.
///
/// Expected: 200 OK with the driver's users, none without a driver
#[tokio::test]
async fn lists_users_of_driver() -> Result<(), TestError> {
    let test = setup().await?;
    let first = test.user().insert_user(None, true).await?;
    let second = test.user().insert_user(None, true).await?;
    test.connector()
        .insert_connector_user("discord", first.id)
        .await?;
    test.connector()
        .insert_connector_user("discord", second.id)
        .await?;
    test.connector()
        .insert_connector_user("teamspeak", first.id)
        .await?;

    let params = ListUsersParams {
        driver: Some("discord".to_string()),
    };
    let result = list_users(State(test.app_state::<AppState>()), Query(params)).await;

    let body: Vec<ConnectorUserDto> = read_json(result.unwrap().into_response()).await;
    let user_ids: Vec<i32> = body.iter().map(|u| u.user_id).collect();
    assert_eq!(user_ids, vec![first.id, second.id]);

    let params = ListUsersParams { driver: None };
    let result = list_users(State(test.app_state::<AppState>()), Query(params)).await;

    let body: Vec<ConnectorUserDto> = read_json(result.unwrap().into_response()).await;
    assert!(body.is_empty());

    Ok(())
}

/// Tests linking then unlinking a user.
///
/// Expected: 200 OK on link, 204 No Content on unlink and 404 Not Found on a second unlink
#[tokio::test]
async fn links_and_unlinks_user() -> Result<(), TestError> {
    let test = setup().await?;
    let user = test.user().insert_user(None, true).await?;

    let body = LinkUserDto {
        connector_id: "123456789".to_string(),
        connector_name: "pilot".to_string(),
        unique_id: "123456789".to_string(),
    };
    let result = link_user(
        State(test.app_state::<AppState>()),
        Path(("discord".to_string(), user.id)),
        Json(body),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let linked: ConnectorUserDto = read_json(resp).await;
    assert_eq!(linked.connector_id, "123456789");
    assert_eq!(linked.user_id, user.id);

    let result = unlink_user(
        State(test.app_state::<AppState>()),
        Path(("discord".to_string(), user.id)),
    )
    .await;
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );

    let result = unlink_user(
        State(test.app_state::<AppState>()),
        Path(("discord".to_string(), user.id)),
    )
    .await;
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Tests linking a user that does not exist.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn link_nonexistent_user_not_found() -> Result<(), TestError> {
    let test = setup().await?;

    let body = LinkUserDto {
        connector_id: "123456789".to_string(),
        connector_name: "pilot".to_string(),
        unique_id: "123456789".to_string(),
    };
    let result = link_user(
        State(test.app_state::<AppState>()),
        Path(("discord".to_string(), 1)),
        Json(body),
    )
    .await;

    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
