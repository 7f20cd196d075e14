use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    fixtures::user::UserFixtures,
    model::{
        CharacterOwnershipModel, EveCharacterModel, RefreshTokenModel, RoleModel, SquadModel,
        UserModel,
    },
};

impl<'a> UserFixtures<'a> {
    /// Insert a user without any characters.
    pub async fn insert_user(
        &self,
        main_character_id: Option<i32>,
        active: bool,
    ) -> Result<UserModel, TestError> {
        let user = entity::heimdall_user::ActiveModel {
            name: ActiveValue::Set("Test User".to_string()),
            main_character_id: ActiveValue::Set(main_character_id),
            active: ActiveValue::Set(active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(&self.setup.db).await?)
    }

    /// Record that a user owns a character.
    ///
    /// # Arguments
    /// - `user_id` - The user record ID
    /// - `character_record_id` - The `eve_character` record ID (not EVE character ID)
    pub async fn insert_user_character_ownership(
        &self,
        user_id: i32,
        character_record_id: i32,
    ) -> Result<CharacterOwnershipModel, TestError> {
        let ownership = entity::heimdall_user_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_record_id),
            owner_hash: ActiveValue::Set("owner_hash".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(ownership.insert(&self.setup.db).await?)
    }

    /// Insert a refresh token for a character, revoked when `valid` is false.
    pub async fn insert_refresh_token(
        &self,
        character_record_id: i32,
        valid: bool,
    ) -> Result<RefreshTokenModel, TestError> {
        let now = Utc::now().naive_utc();
        let token = entity::heimdall_refresh_token::ActiveModel {
            character_id: ActiveValue::Set(character_record_id),
            token: ActiveValue::Set("refresh_token".to_string()),
            revoked_at: ActiveValue::Set(if valid { None } else { Some(now) }),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(token.insert(&self.setup.db).await?)
    }

    /// Insert an active user whose main character is a new mock character.
    ///
    /// The character is owned by the user and holds a valid refresh token.
    pub async fn insert_user_with_mock_character(
        &self,
        character_id: i64,
        corporation_id: i64,
        alliance_id: Option<i64>,
    ) -> Result<(UserModel, CharacterOwnershipModel, EveCharacterModel), TestError> {
        let character_model = self
            .setup
            .eve()
            .insert_mock_character(character_id, corporation_id, alliance_id)
            .await?;

        let user_model = self.insert_user(Some(character_model.id), true).await?;
        let ownership_model = self
            .insert_user_character_ownership(user_model.id, character_model.id)
            .await?;
        self.insert_refresh_token(character_model.id, true).await?;

        Ok((user_model, ownership_model, character_model))
    }

    /// Insert a new mock character owned by an existing user.
    ///
    /// The refresh token of the character is revoked when `valid_token` is false.
    pub async fn insert_mock_character_for_user(
        &self,
        user_id: i32,
        character_id: i64,
        corporation_id: i64,
        alliance_id: Option<i64>,
        valid_token: bool,
    ) -> Result<(CharacterOwnershipModel, EveCharacterModel), TestError> {
        let character_model = self
            .setup
            .eve()
            .insert_mock_character(character_id, corporation_id, alliance_id)
            .await?;

        let ownership_model = self
            .insert_user_character_ownership(user_id, character_model.id)
            .await?;
        self.insert_refresh_token(character_model.id, valid_token)
            .await?;

        Ok((ownership_model, character_model))
    }

    /// Insert a role.
    pub async fn insert_role(&self, title: &str) -> Result<RoleModel, TestError> {
        let role = entity::heimdall_role::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(role.insert(&self.setup.db).await?)
    }

    /// Grant a role to a user.
    pub async fn insert_user_role(
        &self,
        user_id: i32,
        role_id: i32,
    ) -> Result<entity::heimdall_user_role::Model, TestError> {
        let user_role = entity::heimdall_user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role_id: ActiveValue::Set(role_id),
            ..Default::default()
        };

        Ok(user_role.insert(&self.setup.db).await?)
    }

    /// Insert a squad.
    pub async fn insert_squad(&self, name: &str) -> Result<SquadModel, TestError> {
        let squad = entity::heimdall_squad::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(squad.insert(&self.setup.db).await?)
    }

    /// Add a user to a squad.
    pub async fn insert_squad_member(
        &self,
        squad_id: i32,
        user_id: i32,
    ) -> Result<entity::heimdall_squad_member::Model, TestError> {
        let member = entity::heimdall_squad_member::ActiveModel {
            squad_id: ActiveValue::Set(squad_id),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        Ok(member.insert(&self.setup.db).await?)
    }
}
