use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::CharacterOwnershipModel;

/// Character ownership records.
pub struct UserCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserCharacterRepository<'a, C> {
    /// Creates a new instance of [`UserCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all character ownership entries for the provided user ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<CharacterOwnershipModel>, DbErr> {
        entity::prelude::HeimdallUserCharacter::find()
            .filter(entity::heimdall_user_character::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }
}
