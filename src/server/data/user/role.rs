use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{data::contains_ignore_case, model::db::RoleModel};

/// Roles and their grants to users.
pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    /// Creates a new instance of [`RoleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the IDs of all roles granted to a user
    pub async fn get_role_ids_by_user_id(&self, user_id: i32) -> Result<Vec<i64>, DbErr> {
        let role_ids: Vec<i32> = entity::prelude::HeimdallUserRole::find()
            .select_only()
            .column(entity::heimdall_user_role::Column::RoleId)
            .filter(entity::heimdall_user_role::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(role_ids.into_iter().map(i64::from).collect())
    }

    /// Search roles by title
    pub async fn search(&self, query: &str) -> Result<Vec<RoleModel>, DbErr> {
        entity::prelude::HeimdallRole::find()
            .filter(contains_ignore_case(entity::heimdall_role::Column::Title, query))
            .order_by_asc(entity::heimdall_role::Column::Title)
            .all(self.db)
            .await
    }
}
