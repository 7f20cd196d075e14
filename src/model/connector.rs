use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A Heimdall user linked to an account on a third party platform
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConnectorUserDto {
    /// Binding record ID
    pub id: i32,
    /// Connector type, e.g. `discord`
    pub connector_type: String,
    /// Account identifier on the platform
    pub connector_id: String,
    /// Account display name on the platform
    pub connector_name: String,
    /// Heimdall user record ID
    pub user_id: i32,
    /// Platform-specific unique identifier
    pub unique_id: String,
    /// When the user was first linked
    pub created_at: NaiveDateTime,
    /// When the binding last changed
    pub updated_at: NaiveDateTime,
}

/// Sets a linked user is currently entitled to along with the nickname to apply
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConnectorUserSetsDto {
    /// Connector type of the binding
    pub connector_type: String,
    /// Account identifier on the platform
    pub connector_id: String,
    /// Nickname built from the user's main character
    pub nickname: String,
    /// Platform IDs of the entitled sets, sorted and without duplicates
    pub sets: Vec<String>,
}

/// Platform account to link a Heimdall user to
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LinkUserDto {
    /// Account identifier on the platform
    pub connector_id: String,
    /// Account display name on the platform
    pub connector_name: String,
    /// Platform-specific unique identifier
    pub unique_id: String,
}
