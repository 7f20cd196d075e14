use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        connector::{ConnectorUserDto, ConnectorUserSetsDto, LinkUserDto},
    },
    server::{
        error::Error,
        model::{app::AppState, db::ConnectorUserModel},
        service::{
            connector::{
                entitlement::EntitlementResolver,
                nickname::NicknameService,
                user::{ConnectorAccount, ConnectorUserService},
            },
            user::identity::IdentityService,
        },
    },
};

/// OpenAPI tag of the connector endpoints
pub static CONNECTOR_TAG: &str = "connector";

/// Query of the linked user listing.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// Connector type of the linked users
    pub driver: Option<String>,
}

impl From<ConnectorUserModel> for ConnectorUserDto {
    fn from(model: ConnectorUserModel) -> Self {
        Self {
            id: model.id,
            connector_type: model.connector_type,
            connector_id: model.connector_id,
            connector_name: model.connector_name,
            user_id: model.user_id,
            unique_id: model.unique_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn not_found(message: &str) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// List the users linked on a connector
///
/// Without a `driver` no user is listed.
#[utoipa::path(
    get,
    path = "/api/connector/users",
    tag = CONNECTOR_TAG,
    params(ListUsersParams),
    responses(
        (status = 200, description = "Linked users of the connector", body = Vec<ConnectorUserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> Result<impl IntoResponse, Error> {
    let connector_user_service = ConnectorUserService::new(&state.db, &state.connector);

    let users: Vec<ConnectorUserDto> = connector_user_service
        .list(params.driver.as_deref())
        .await?
        .into_iter()
        .map(ConnectorUserDto::from)
        .collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Get the sets and nickname of a linked user
#[utoipa::path(
    get,
    path = "/api/connector/{driver}/users/{user_id}/sets",
    tag = CONNECTOR_TAG,
    params(
        ("driver" = String, Path, description = "Connector type"),
        ("user_id" = i32, Path, description = "Heimdall user ID")
    ),
    responses(
        (status = 200, description = "Entitled sets of the linked user", body = ConnectorUserSetsDto),
        (status = 404, description = "User is not linked on the connector", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_sets(
    State(state): State<AppState>,
    Path((driver, user_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, Error> {
    let connector_user_service = ConnectorUserService::new(&state.db, &state.connector);

    let Some(linked_user) = connector_user_service.get(&driver, user_id).await? else {
        return Ok(not_found("User not linked"));
    };

    let mut resolver = EntitlementResolver::new(&state.db, &state.connector);
    let sets = resolver.resolve_entitlements(&linked_user).await?;

    let nickname = NicknameService::new(&state.db, &state.connector)
        .build_nickname(&linked_user)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ConnectorUserSetsDto {
            connector_type: linked_user.connector_type,
            connector_id: linked_user.connector_id,
            nickname,
            sets: sets.into_iter().collect(),
        }),
    )
        .into_response())
}

/// Link a user to a platform account
///
/// Replaces the account of an existing link for the same connector.
#[utoipa::path(
    put,
    path = "/api/connector/{driver}/users/{user_id}",
    tag = CONNECTOR_TAG,
    params(
        ("driver" = String, Path, description = "Connector type"),
        ("user_id" = i32, Path, description = "Heimdall user ID")
    ),
    request_body = LinkUserDto,
    responses(
        (status = 200, description = "Linked user", body = ConnectorUserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn link_user(
    State(state): State<AppState>,
    Path((driver, user_id)): Path<(String, i32)>,
    Json(body): Json<LinkUserDto>,
) -> Result<impl IntoResponse, Error> {
    if IdentityService::new(&state.db)
        .get_user(user_id)
        .await?
        .is_none()
    {
        return Ok(not_found("User not found"));
    }

    let account = ConnectorAccount {
        connector_id: body.connector_id,
        connector_name: body.connector_name,
        unique_id: body.unique_id,
    };

    let linked_user = ConnectorUserService::new(&state.db, &state.connector)
        .link_user(&driver, user_id, &account)
        .await?;

    Ok((StatusCode::OK, Json(ConnectorUserDto::from(linked_user))).into_response())
}

/// Unlink a user from a connector
#[utoipa::path(
    delete,
    path = "/api/connector/{driver}/users/{user_id}",
    tag = CONNECTOR_TAG,
    params(
        ("driver" = String, Path, description = "Connector type"),
        ("user_id" = i32, Path, description = "Heimdall user ID")
    ),
    responses(
        (status = 204, description = "User unlinked"),
        (status = 404, description = "User is not linked on the connector", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlink_user(
    State(state): State<AppState>,
    Path((driver, user_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, Error> {
    let unlinked = ConnectorUserService::new(&state.db, &state.connector)
        .unlink(&driver, user_id)
        .await?;

    if !unlinked {
        return Ok(not_found("User not linked"));
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}
