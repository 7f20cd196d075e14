//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate used throughout the server.

/// Type alias for Heimdall user database model.
///
/// # Fields (from `entity::heimdall_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `name` - Account name, used as nickname when the user has no character
/// - `main_character_id` - Optional `eve_character` record ID of the main character
/// - `active` - Whether the account is enabled
/// - `created_at` - Timestamp when the user account was created
pub type UserModel = entity::heimdall_user::Model;

/// Type alias for character ownership database model.
pub type CharacterOwnershipModel = entity::heimdall_user_character::Model;

/// Type alias for character refresh token database model.
///
/// A token is valid while `revoked_at` is `None`.
pub type RefreshTokenModel = entity::heimdall_refresh_token::Model;

/// Type alias for role database model.
pub type RoleModel = entity::heimdall_role::Model;

/// Type alias for squad database model.
pub type SquadModel = entity::heimdall_squad::Model;

/// Type alias for EVE Online character database model.
///
/// # Fields (from `entity::eve_character::Model`)
/// - `id` - Primary key, database identifier
/// - `character_id` - EVE Online character ID (unique)
/// - `name` - Character name
/// - `corporation_id` - EVE Online ID of the current corporation
/// - `alliance_id` - EVE Online ID of the current alliance (nullable)
/// - `created_at` - Timestamp when record was created
/// - `affiliation_updated_at` - Timestamp of last affiliation refresh
pub type EveCharacterModel = entity::eve_character::Model;

/// Type alias for EVE Online corporation database model.
pub type EveCorporationModel = entity::eve_corporation::Model;

/// Type alias for EVE Online alliance database model.
pub type EveAllianceModel = entity::eve_alliance::Model;

/// Type alias for corporation title database model.
pub type EveCorporationTitleModel = entity::eve_corporation_title::Model;

/// Type alias for connector set database model.
///
/// # Fields (from `entity::connector_set::Model`)
/// - `id` - Primary key
/// - `connector_type` - Connector the set belongs to, e.g. `discord`
/// - `connector_id` - Identifier of the group on the platform
/// - `name` - Display name
/// - `is_public` - Whether every linked user passing gating is entitled to the set
pub type SetModel = entity::connector_set::Model;

/// Type alias for linked platform user database model.
///
/// # Fields (from `entity::connector_user::Model`)
/// - `id` - Primary key
/// - `connector_type` - Connector the binding belongs to
/// - `connector_id` - Account identifier on the platform
/// - `connector_name` - Account display name at the time of linking
/// - `user_id` - Heimdall user ID
/// - `unique_id` - Platform-specific unique identifier
pub type ConnectorUserModel = entity::connector_user::Model;

/// Type alias for connector log database model.
pub type ConnectorLogModel = entity::connector_log::Model;
