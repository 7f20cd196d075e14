use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::EveCorporationModel;

/// Read access to `eve_corporation`.
pub struct CorporationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CorporationRepository<'a, C> {
    /// Creates a new instance of [`CorporationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Find a corporation using its EVE Online corporation ID
    pub async fn find_by_corporation_id(
        &self,
        corporation_id: i64,
    ) -> Result<Option<EveCorporationModel>, DbErr> {
        entity::prelude::EveCorporation::find()
            .filter(entity::eve_corporation::Column::CorporationId.eq(corporation_id))
            .one(self.db)
            .await
    }
}
