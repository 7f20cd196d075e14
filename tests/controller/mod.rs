//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built in the test and their responses
//! decoded from JSON.

mod connector;
mod lookup;

use axum::response::Response;
use heimdall::server::model::app::AppState;
use heimdall_test_utils::prelude::*;
use serde::de::DeserializeOwned;

/// Decodes the JSON body of a response.
async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to decode response body")
}

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_user_tables()
        .with_connector_tables()
        .build()
        .await
}
