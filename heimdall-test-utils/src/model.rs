//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main heimdall crate to keep fixture signatures short.

/// Type alias for Heimdall user database model.
pub type UserModel = entity::heimdall_user::Model;

/// Type alias for character ownership database model.
pub type CharacterOwnershipModel = entity::heimdall_user_character::Model;

/// Type alias for character refresh token database model.
pub type RefreshTokenModel = entity::heimdall_refresh_token::Model;

/// Type alias for role database model.
pub type RoleModel = entity::heimdall_role::Model;

/// Type alias for squad database model.
pub type SquadModel = entity::heimdall_squad::Model;

/// Type alias for EVE Online character database model.
pub type EveCharacterModel = entity::eve_character::Model;

/// Type alias for EVE Online corporation database model.
pub type EveCorporationModel = entity::eve_corporation::Model;

/// Type alias for EVE Online alliance database model.
pub type EveAllianceModel = entity::eve_alliance::Model;

/// Type alias for corporation title database model.
pub type EveCorporationTitleModel = entity::eve_corporation_title::Model;

/// Type alias for connector set database model.
pub type SetModel = entity::connector_set::Model;

/// Type alias for connector set criterion database model.
pub type SetEntityModel = entity::connector_set_entity::Model;

/// Type alias for linked platform user database model.
pub type ConnectorUserModel = entity::connector_user::Model;
