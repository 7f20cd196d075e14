use std::collections::BTreeSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        eve::{character::CharacterRepository, title::TitleRepository},
        user::{
            refresh_token::RefreshTokenRepository, role::RoleRepository, squad::SquadRepository,
            user_character::UserCharacterRepository, UserRepository,
        },
    },
    error::Error,
    model::{
        db::UserModel,
        identity::{Affiliations, CredentialStatus},
    },
};

/// Read-only view of a Heimdall user for set resolution and nicknames.
///
/// Character, corporation and title data is maintained by the identity system, this
/// service only queries it.
pub struct IdentityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IdentityService<'a> {
    /// Creates a new instance of [`IdentityService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get(user_id).await?)
    }

    /// Counts the characters owned by a user and finds which of them hold a valid refresh token.
    pub async fn get_credential_status(&self, user_id: i32) -> Result<CredentialStatus, Error> {
        let user_character_repo = UserCharacterRepository::new(self.db);
        let refresh_token_repo = RefreshTokenRepository::new(self.db);

        let ownerships = user_character_repo.get_many_by_user_id(user_id).await?;
        let character_ids: Vec<i32> = ownerships.iter().map(|o| o.character_id).collect();

        let mut credentialed_character_ids: Vec<i32> = refresh_token_repo
            .get_valid_by_character_ids(&character_ids)
            .await?
            .into_iter()
            .map(|token| token.character_id)
            .collect();
        credentialed_character_ids.sort_unstable();

        Ok(CredentialStatus {
            characters: ownerships.len() as u64,
            credentialed_character_ids,
        })
    }

    /// Collects the corporations, alliances and titles of the provided characters.
    ///
    /// # Arguments
    /// - `character_ids` - `eve_character` record IDs, usually the credentialed characters
    ///   of a user
    pub async fn get_affiliations(&self, character_ids: &[i32]) -> Result<Affiliations, Error> {
        let character_repo = CharacterRepository::new(self.db);
        let title_repo = TitleRepository::new(self.db);

        let (characters, title_ids) = tokio::try_join!(
            character_repo.get_many_by_ids(character_ids),
            title_repo.get_title_ids_by_character_ids(character_ids),
        )?;

        let corporation_ids: BTreeSet<i64> =
            characters.iter().map(|c| c.corporation_id).collect();
        let alliance_ids: BTreeSet<i64> =
            characters.iter().filter_map(|c| c.alliance_id).collect();

        Ok(Affiliations {
            corporation_ids: corporation_ids.into_iter().collect(),
            alliance_ids: alliance_ids.into_iter().collect(),
            title_ids,
        })
    }

    /// IDs of the roles granted to a user.
    pub async fn get_role_ids(&self, user_id: i32) -> Result<Vec<i64>, Error> {
        let role_repo = RoleRepository::new(self.db);

        Ok(role_repo.get_role_ids_by_user_id(user_id).await?)
    }

    /// IDs of the squads a user is a member of.
    pub async fn get_squad_ids(&self, user_id: i32) -> Result<Vec<i64>, Error> {
        let squad_repo = SquadRepository::new(self.db);

        Ok(squad_repo.get_squad_ids_by_user_id(user_id).await?)
    }
}
