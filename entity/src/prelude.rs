pub use super::connector_log::Entity as ConnectorLog;
pub use super::connector_set::Entity as ConnectorSet;
pub use super::connector_set_entity::Entity as ConnectorSetEntity;
pub use super::connector_user::Entity as ConnectorUser;
pub use super::eve_alliance::Entity as EveAlliance;
pub use super::eve_character::Entity as EveCharacter;
pub use super::eve_character_title::Entity as EveCharacterTitle;
pub use super::eve_corporation::Entity as EveCorporation;
pub use super::eve_corporation_title::Entity as EveCorporationTitle;
pub use super::heimdall_refresh_token::Entity as HeimdallRefreshToken;
pub use super::heimdall_role::Entity as HeimdallRole;
pub use super::heimdall_squad::Entity as HeimdallSquad;
pub use super::heimdall_squad_member::Entity as HeimdallSquadMember;
pub use super::heimdall_user::Entity as HeimdallUser;
pub use super::heimdall_user_character::Entity as HeimdallUserCharacter;
pub use super::heimdall_user_role::Entity as HeimdallUserRole;
