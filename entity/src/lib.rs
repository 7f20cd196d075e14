//! SeaORM entities for Heimdall.
//!
//! Tables prefixed `eve_` hold cached EVE Online data, `heimdall_` tables hold the identity
//! side (users, character ownership, refresh tokens, roles and squads) and `connector_`
//! tables hold sets, set criteria, linked platform users and connector logs.

pub mod prelude;

pub mod connector_log;
pub mod connector_set;
pub mod connector_set_entity;
pub mod connector_user;
pub mod eve_alliance;
pub mod eve_character;
pub mod eve_character_title;
pub mod eve_corporation;
pub mod eve_corporation_title;
pub mod heimdall_refresh_token;
pub mod heimdall_role;
pub mod heimdall_squad;
pub mod heimdall_squad_member;
pub mod heimdall_user;
pub mod heimdall_user_character;
pub mod heimdall_user_role;
