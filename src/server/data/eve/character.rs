use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::EveCharacterModel;

/// Read access to `eve_character`.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get a character using its record ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<EveCharacterModel>, DbErr> {
        entity::prelude::EveCharacter::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Get characters by record IDs, ordered by record ID
    pub async fn get_many_by_ids(&self, ids: &[i32]) -> Result<Vec<EveCharacterModel>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::EveCharacter::find()
            .filter(entity::eve_character::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::eve_character::Column::Id)
            .all(self.db)
            .await
    }
}
