//! HTTP controller endpoints for the Heimdall web API.
//!
//! Axum handlers for the lookup endpoints used by set editors and the connector endpoints
//! used by platform drivers. Controllers extract inputs, call repositories and services, and
//! use utoipa for OpenAPI documentation.

/// Linked users and their entitled sets
pub mod connector;
/// Autocomplete endpoints
pub mod lookup;
