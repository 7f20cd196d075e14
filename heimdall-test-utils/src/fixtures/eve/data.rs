//! EVE entity database insertion utilities.
//!
//! This module provides methods for inserting EVE Online entity records into the test
//! database with automatic parent entity creation. If a parent entity is specified but
//! doesn't exist, it will be created automatically.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    fixtures::eve::EveFixtures,
    model::{EveAllianceModel, EveCharacterModel, EveCorporationModel, EveCorporationTitleModel},
};

impl<'a> EveFixtures<'a> {
    /// Insert a mock alliance into the database.
    ///
    /// Returns the existing record if an alliance with the same ID was already inserted.
    /// The alliance ticker is always `AUTMN`.
    pub async fn insert_mock_alliance(
        &self,
        alliance_id: i64,
    ) -> Result<EveAllianceModel, TestError> {
        if let Some(existing) = entity::prelude::EveAlliance::find()
            .filter(entity::eve_alliance::Column::AllianceId.eq(alliance_id))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        let alliance = entity::eve_alliance::ActiveModel {
            alliance_id: ActiveValue::Set(alliance_id),
            name: ActiveValue::Set("Autumn.".to_string()),
            ticker: ActiveValue::Set("AUTMN".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(alliance.insert(&self.setup.db).await?)
    }

    /// Insert a mock corporation into the database.
    ///
    /// Creates the alliance first when `alliance_id` is provided. Returns the existing record
    /// if a corporation with the same ID was already inserted. The corporation ticker is
    /// always `F4LL.`.
    pub async fn insert_mock_corporation(
        &self,
        corporation_id: i64,
        alliance_id: Option<i64>,
    ) -> Result<EveCorporationModel, TestError> {
        if let Some(existing) = entity::prelude::EveCorporation::find()
            .filter(entity::eve_corporation::Column::CorporationId.eq(corporation_id))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        if let Some(alliance_id) = alliance_id {
            self.insert_mock_alliance(alliance_id).await?;
        }

        let corporation = entity::eve_corporation::ActiveModel {
            corporation_id: ActiveValue::Set(corporation_id),
            alliance_id: ActiveValue::Set(alliance_id),
            name: ActiveValue::Set("The Order of Autumn".to_string()),
            ticker: ActiveValue::Set("F4LL.".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(corporation.insert(&self.setup.db).await?)
    }

    /// Insert a mock character into the database.
    ///
    /// Creates the corporation (and alliance) first if they don't exist yet. The character is
    /// named `Character {character_id}`.
    pub async fn insert_mock_character(
        &self,
        character_id: i64,
        corporation_id: i64,
        alliance_id: Option<i64>,
    ) -> Result<EveCharacterModel, TestError> {
        self.insert_mock_corporation(corporation_id, alliance_id)
            .await?;

        let character = entity::eve_character::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            name: ActiveValue::Set(format!("Character {}", character_id)),
            corporation_id: ActiveValue::Set(corporation_id),
            alliance_id: ActiveValue::Set(alliance_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            affiliation_updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(character.insert(&self.setup.db).await?)
    }

    /// Insert a corporation title into the database.
    pub async fn insert_mock_title(
        &self,
        corporation_id: i64,
        title_id: i64,
        name: &str,
    ) -> Result<EveCorporationTitleModel, TestError> {
        let title = entity::eve_corporation_title::ActiveModel {
            corporation_id: ActiveValue::Set(corporation_id),
            title_id: ActiveValue::Set(title_id),
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        Ok(title.insert(&self.setup.db).await?)
    }

    /// Grant a corporation title to a character.
    ///
    /// # Arguments
    /// - `character_record_id` - The `eve_character` record ID (not EVE character ID)
    /// - `title_record_id` - The `eve_corporation_title` record ID
    pub async fn insert_character_title(
        &self,
        character_record_id: i32,
        title_record_id: i32,
    ) -> Result<entity::eve_character_title::Model, TestError> {
        let character_title = entity::eve_character_title::ActiveModel {
            character_id: ActiveValue::Set(character_record_id),
            title_id: ActiveValue::Set(title_record_id),
            ..Default::default()
        };

        Ok(character_title.insert(&self.setup.db).await?)
    }
}
