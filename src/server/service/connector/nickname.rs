use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    config::{ConnectorConfig, DEFAULT_NICKNAME_FORMAT},
    data::eve::{
        alliance::AllianceRepository, character::CharacterRepository,
        corporation::CorporationRepository,
    },
    error::Error,
    model::db::{ConnectorUserModel, EveCharacterModel, UserModel},
    service::user::identity::IdentityService,
    util::format::format_positional,
};

/// Builds the display name of a linked user on a platform.
pub struct NicknameService<'a> {
    db: &'a DatabaseConnection,
    config: &'a ConnectorConfig,
}

impl<'a> NicknameService<'a> {
    /// Creates a new instance of [`NicknameService`]
    pub fn new(db: &'a DatabaseConnection, config: &'a ConnectorConfig) -> Self {
        Self { db, config }
    }

    /// Builds the nickname of a linked user.
    ///
    /// Uses the user's main character, or their credentialed character with the lowest record
    /// ID when no main character is set. Users without any character are named after their
    /// account. When tickers are enabled the configured format is applied with the character
    /// name, corporation ticker and alliance ticker as arguments.
    ///
    /// # Returns
    /// - `Ok(String)` - The nickname
    /// - `Err(Error::DbErr)` - The identity user does not exist or a query failed
    pub async fn build_nickname(&self, linked_user: &ConnectorUserModel) -> Result<String, Error> {
        let identity = IdentityService::new(self.db);

        let user = identity.get_user(linked_user.user_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("user ID {}", linked_user.user_id))
        })?;

        let Some(character) = self.find_character(&user).await? else {
            return Ok(user.name);
        };

        if !self.config.nickname_ticker {
            return Ok(character.name);
        }

        let corporation_repo = CorporationRepository::new(self.db);
        let alliance_repo = AllianceRepository::new(self.db);

        let corporation_ticker = corporation_repo
            .find_by_corporation_id(character.corporation_id)
            .await?
            .map(|corporation| corporation.ticker)
            .unwrap_or_default();

        let alliance_ticker = match character.alliance_id {
            Some(alliance_id) => alliance_repo
                .find_by_alliance_id(alliance_id)
                .await?
                .map(|alliance| alliance.ticker)
                .unwrap_or_default(),
            None => String::new(),
        };

        let format = if self.config.nickname_format.is_empty() {
            DEFAULT_NICKNAME_FORMAT
        } else {
            self.config.nickname_format.as_str()
        };

        Ok(format_positional(
            format,
            &[&character.name, &corporation_ticker, &alliance_ticker],
        ))
    }

    async fn find_character(&self, user: &UserModel) -> Result<Option<EveCharacterModel>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        if let Some(main_character_id) = user.main_character_id {
            if let Some(character) = character_repo.get_by_id(main_character_id).await? {
                return Ok(Some(character));
            }
        }

        let credentials = IdentityService::new(self.db)
            .get_credential_status(user.id)
            .await?;

        match credentials.credentialed_character_ids.first() {
            Some(&character_id) => Ok(character_repo.get_by_id(character_id).await?),
            None => Ok(None),
        }
    }
}
