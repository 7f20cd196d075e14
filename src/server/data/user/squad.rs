use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{data::contains_ignore_case, model::db::SquadModel};

/// Squads and their members.
pub struct SquadRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SquadRepository<'a, C> {
    /// Creates a new instance of [`SquadRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the IDs of all squads a user is a member of
    pub async fn get_squad_ids_by_user_id(&self, user_id: i32) -> Result<Vec<i64>, DbErr> {
        let squad_ids: Vec<i32> = entity::prelude::HeimdallSquadMember::find()
            .select_only()
            .column(entity::heimdall_squad_member::Column::SquadId)
            .filter(entity::heimdall_squad_member::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(squad_ids.into_iter().map(i64::from).collect())
    }

    /// Search squads by name
    pub async fn search(&self, query: &str) -> Result<Vec<SquadModel>, DbErr> {
        entity::prelude::HeimdallSquad::find()
            .filter(contains_ignore_case(entity::heimdall_squad::Column::Name, query))
            .order_by_asc(entity::heimdall_squad::Column::Name)
            .all(self.db)
            .await
    }
}
