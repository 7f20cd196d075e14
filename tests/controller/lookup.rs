//! Tests for the lookup endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use heimdall::{
    model::lookup::LookupResultsDto,
    server::controller::lookup::{
        lookup_roles, lookup_sets, lookup_squads, lookup_titles, LookupParams, SetLookupParams,
        TitleLookupParams,
    },
};

use super::*;

/// Tests title lookup with markup in title names.
///
/// Expected: 200 OK with the matching title of the corporation, markup removed
#[tokio::test]
async fn titles_strip_markup() -> Result<(), TestError> {
    let test = setup().await?;
    let title = test
        .eve()
        .insert_mock_title(98000001, 1, "<color=0xff00ff00>Director</color>")
        .await?;
    test.eve().insert_mock_title(98000001, 2, "Member").await?;
    test.eve().insert_mock_title(98000002, 1, "Director").await?;

    let params = TitleLookupParams {
        corporation_id: Some(98000001),
        q: Some("Dir".to_string()),
    };
    let result = lookup_titles(State(test.app_state::<AppState>()), Query(params)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: LookupResultsDto = read_json(resp).await;
    assert_eq!(body.results.len(), 1);
    assert_eq!(body.results[0].id, title.id as i64);
    assert_eq!(body.results[0].text, "Director");

    Ok(())
}

/// Tests title lookup without a corporation.
///
/// Expected: 200 OK with no results
#[tokio::test]
async fn titles_require_corporation() -> Result<(), TestError> {
    let test = setup().await?;
    test.eve().insert_mock_title(98000001, 1, "Director").await?;

    let params = TitleLookupParams {
        corporation_id: None,
        q: None,
    };
    let result = lookup_titles(State(test.app_state::<AppState>()), Query(params)).await;

    let body: LookupResultsDto = read_json(result.unwrap().into_response()).await;
    assert!(body.results.is_empty());

    Ok(())
}

/// Tests role lookup by substring.
///
/// Expected: 200 OK with matching roles only
#[tokio::test]
async fn roles_match_substring() -> Result<(), TestError> {
    let test = setup().await?;
    let fc = test.user().insert_role("Fleet Commander").await?;
    test.user().insert_role("Recruiter").await?;

    let params = LookupParams {
        q: Some("Fleet".to_string()),
    };
    let result = lookup_roles(State(test.app_state::<AppState>()), Query(params)).await;

    let body: LookupResultsDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(body.results.len(), 1);
    assert_eq!(body.results[0].id, fc.id as i64);
    assert_eq!(body.results[0].text, "Fleet Commander");

    Ok(())
}

/// Tests squad lookup without a query.
///
/// Expected: 200 OK with every squad
#[tokio::test]
async fn squads_default_to_all() -> Result<(), TestError> {
    let test = setup().await?;
    test.user().insert_squad("Capitals").await?;
    test.user().insert_squad("Logistics").await?;

    let params = LookupParams { q: None };
    let result = lookup_squads(State(test.app_state::<AppState>()), Query(params)).await;

    let body: LookupResultsDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(body.results.len(), 2);

    Ok(())
}

/// Tests set lookup filtered by driver.
///
/// Expected: 200 OK with sets of the driver only, none without a driver
#[tokio::test]
async fn sets_filter_by_driver() -> Result<(), TestError> {
    let test = setup().await?;
    let discord = test
        .connector()
        .insert_named_set("discord", "d1", "Pilots", false)
        .await?;
    test.connector()
        .insert_named_set("teamspeak", "t1", "Pilots", false)
        .await?;

    let params = SetLookupParams {
        q: Some("Pil".to_string()),
        driver: Some("discord".to_string()),
    };
    let result = lookup_sets(State(test.app_state::<AppState>()), Query(params)).await;

    let body: LookupResultsDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(body.results.len(), 1);
    assert_eq!(body.results[0].id, discord.id as i64);

    let params = SetLookupParams {
        q: None,
        driver: None,
    };
    let result = lookup_sets(State(test.app_state::<AppState>()), Query(params)).await;

    let body: LookupResultsDto = read_json(result.unwrap().into_response()).await;
    assert!(body.results.is_empty());

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: 500 Internal Server Error
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let params = LookupParams { q: None };
    let result = lookup_roles(State(test.app_state::<AppState>()), Query(params)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
