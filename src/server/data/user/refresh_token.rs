use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::RefreshTokenModel;

/// Refresh tokens of owned characters, a token is valid until revoked.
pub struct RefreshTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RefreshTokenRepository<'a, C> {
    /// Creates a new instance of [`RefreshTokenRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the refresh tokens of the provided characters which have not been revoked
    ///
    /// # Arguments
    /// - `character_ids`: `eve_character` record IDs (not EVE character IDs)
    pub async fn get_valid_by_character_ids(
        &self,
        character_ids: &[i32],
    ) -> Result<Vec<RefreshTokenModel>, DbErr> {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::HeimdallRefreshToken::find()
            .filter(
                entity::heimdall_refresh_token::Column::CharacterId
                    .is_in(character_ids.iter().copied()),
            )
            .filter(entity::heimdall_refresh_token::Column::RevokedAt.is_null())
            .all(self.db)
            .await
    }
}
