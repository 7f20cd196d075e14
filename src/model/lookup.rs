use serde::{Deserialize, Serialize};

/// A single autocomplete entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LookupItemDto {
    /// Record ID to submit when the entry is selected
    pub id: i64,
    /// Display text of the entry
    pub text: String,
}

/// Autocomplete response body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LookupResultsDto {
    /// Matching entries sorted by text
    pub results: Vec<LookupItemDto>,
}
