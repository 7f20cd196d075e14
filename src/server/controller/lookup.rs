use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        lookup::{LookupItemDto, LookupResultsDto},
    },
    server::{
        data::{
            connector::set::SetRepository,
            eve::title::TitleRepository,
            user::{role::RoleRepository, squad::SquadRepository},
        },
        error::Error,
        model::app::AppState,
        util::format::strip_tags,
    },
};

/// OpenAPI tag of the lookup endpoints
pub static LOOKUP_TAG: &str = "lookup";

/// Query of the title lookup.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TitleLookupParams {
    /// EVE Online corporation ID the titles belong to
    pub corporation_id: Option<i64>,
    /// Substring of the title name
    pub q: Option<String>,
}

/// Query of the role and squad lookups.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LookupParams {
    /// Substring of the name
    pub q: Option<String>,
}

/// Query of the set lookup.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SetLookupParams {
    /// Substring of the set name
    pub q: Option<String>,
    /// Connector type of the sets
    pub driver: Option<String>,
}

/// Search the titles of a corporation
///
/// Markup is stripped from title names. Without a corporation no title is returned.
#[utoipa::path(
    get,
    path = "/api/lookup/titles",
    tag = LOOKUP_TAG,
    params(TitleLookupParams),
    responses(
        (status = 200, description = "Matching titles", body = LookupResultsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_titles(
    State(state): State<AppState>,
    Query(params): Query<TitleLookupParams>,
) -> Result<impl IntoResponse, Error> {
    let Some(corporation_id) = params.corporation_id else {
        return Ok((StatusCode::OK, Json(LookupResultsDto { results: Vec::new() })));
    };

    let title_repo = TitleRepository::new(&state.db);
    let titles = title_repo
        .search(corporation_id, &params.q.unwrap_or_default())
        .await?;

    let results = titles
        .into_iter()
        .map(|title| LookupItemDto {
            id: i64::from(title.id),
            text: strip_tags(&title.name),
        })
        .collect();

    Ok((StatusCode::OK, Json(LookupResultsDto { results })))
}

/// Search roles by title
#[utoipa::path(
    get,
    path = "/api/lookup/roles",
    tag = LOOKUP_TAG,
    params(LookupParams),
    responses(
        (status = 200, description = "Matching roles", body = LookupResultsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_roles(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<impl IntoResponse, Error> {
    let role_repo = RoleRepository::new(&state.db);
    let roles = role_repo.search(&params.q.unwrap_or_default()).await?;

    let results = roles
        .into_iter()
        .map(|role| LookupItemDto {
            id: i64::from(role.id),
            text: role.title,
        })
        .collect();

    Ok((StatusCode::OK, Json(LookupResultsDto { results })))
}

/// Search squads by name
#[utoipa::path(
    get,
    path = "/api/lookup/squads",
    tag = LOOKUP_TAG,
    params(LookupParams),
    responses(
        (status = 200, description = "Matching squads", body = LookupResultsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_squads(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<impl IntoResponse, Error> {
    let squad_repo = SquadRepository::new(&state.db);
    let squads = squad_repo.search(&params.q.unwrap_or_default()).await?;

    let results = squads
        .into_iter()
        .map(|squad| LookupItemDto {
            id: i64::from(squad.id),
            text: squad.name,
        })
        .collect();

    Ok((StatusCode::OK, Json(LookupResultsDto { results })))
}

/// Search the sets of a connector type by name
#[utoipa::path(
    get,
    path = "/api/lookup/sets",
    tag = LOOKUP_TAG,
    params(SetLookupParams),
    responses(
        (status = 200, description = "Matching sets", body = LookupResultsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_sets(
    State(state): State<AppState>,
    Query(params): Query<SetLookupParams>,
) -> Result<impl IntoResponse, Error> {
    let set_repo = SetRepository::new(&state.db);
    let sets = set_repo
        .search(
            &params.driver.unwrap_or_default(),
            &params.q.unwrap_or_default(),
        )
        .await?;

    let results = sets
        .into_iter()
        .map(|set| LookupItemDto {
            id: i64::from(set.id),
            text: set.name,
        })
        .collect();

    Ok((StatusCode::OK, Json(LookupResultsDto { results })))
}
