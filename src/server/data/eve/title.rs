use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{data::contains_ignore_case, model::db::EveCorporationTitleModel};

/// Corporation titles and their holders.
pub struct TitleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TitleRepository<'a, C> {
    /// Creates a new instance of [`TitleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the corporation title record IDs held by any of the provided characters
    ///
    /// # Arguments
    /// - `character_ids`: `eve_character` record IDs (not EVE character IDs)
    pub async fn get_title_ids_by_character_ids(
        &self,
        character_ids: &[i32],
    ) -> Result<Vec<i64>, DbErr> {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        let title_ids: Vec<i32> = entity::prelude::EveCharacterTitle::find()
            .select_only()
            .column(entity::eve_character_title::Column::TitleId)
            .distinct()
            .filter(
                entity::eve_character_title::Column::CharacterId
                    .is_in(character_ids.iter().copied()),
            )
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(title_ids.into_iter().map(i64::from).collect())
    }

    /// Search the titles of a corporation by name
    pub async fn search(
        &self,
        corporation_id: i64,
        query: &str,
    ) -> Result<Vec<EveCorporationTitleModel>, DbErr> {
        entity::prelude::EveCorporationTitle::find()
            .filter(entity::eve_corporation_title::Column::CorporationId.eq(corporation_id))
            .filter(contains_ignore_case(
                entity::eve_corporation_title::Column::Name,
                query,
            ))
            .order_by_asc(entity::eve_corporation_title::Column::Name)
            .all(self.db)
            .await
    }
}
