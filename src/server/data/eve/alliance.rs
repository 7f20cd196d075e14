use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::EveAllianceModel;

/// Read access to `eve_alliance`.
pub struct AllianceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AllianceRepository<'a, C> {
    /// Creates a new instance of [`AllianceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Find an alliance using its EVE Online alliance ID
    pub async fn find_by_alliance_id(
        &self,
        alliance_id: i64,
    ) -> Result<Option<EveAllianceModel>, DbErr> {
        entity::prelude::EveAlliance::find()
            .filter(entity::eve_alliance::Column::AllianceId.eq(alliance_id))
            .one(self.db)
            .await
    }
}
