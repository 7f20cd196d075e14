//! Data transfer objects returned by the HTTP API.

/// Generic API responses
pub mod api;
/// Linked user DTOs
pub mod connector;
/// Autocomplete DTOs
pub mod lookup;
