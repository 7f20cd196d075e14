//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications and
//! the resulting document is served at `/api/docs/openapi.json`.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and the OpenAPI document.
///
/// # Registered Endpoints
/// - `GET /api/lookup/titles` - Search the titles of a corporation
/// - `GET /api/lookup/roles` - Search roles
/// - `GET /api/lookup/squads` - Search squads
/// - `GET /api/lookup/sets` - Search the sets of a connector
/// - `GET /api/connector/users` - List the users linked on a connector
/// - `GET /api/connector/{driver}/users/{user_id}/sets` - Entitled sets and nickname of a user
/// - `PUT /api/connector/{driver}/users/{user_id}` - Link a user to a platform account
/// - `DELETE /api/connector/{driver}/users/{user_id}` - Unlink a user
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be given its state.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, connector: config.connector };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Heimdall", description = "Heimdall API"), tags(
        (name = controller::lookup::LOOKUP_TAG, description = "Autocomplete for set editors"),
        (name = controller::connector::CONNECTOR_TAG, description = "Linked users and their sets"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::lookup::lookup_titles))
        .routes(routes!(controller::lookup::lookup_roles))
        .routes(routes!(controller::lookup::lookup_squads))
        .routes(routes!(controller::lookup::lookup_sets))
        .routes(routes!(controller::connector::list_users))
        .routes(routes!(controller::connector::get_user_sets))
        .routes(routes!(
            controller::connector::link_user,
            controller::connector::unlink_user
        ))
        .split_for_parts();

    routes.route(
        "/api/docs/openapi.json",
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}
