use entity::connector_set_entity::SetEntityType;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{data::contains_ignore_case, model::db::SetModel};

/// Queries over connector sets and their membership criteria.
///
/// Every query is scoped to a single connector type and returns the platform identifiers
/// (`connector_id`) of the matching sets.
pub struct SetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SetRepository<'a, C> {
    /// Creates a new instance of [`SetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Sets granted directly to a user
    pub async fn get_user_sets(
        &self,
        connector_type: &str,
        user_id: i32,
    ) -> Result<Vec<String>, DbErr> {
        self.get_sets_by_entities(connector_type, SetEntityType::User, &[i64::from(user_id)])
            .await
    }

    /// Sets granted to any of the provided roles
    pub async fn get_role_sets(
        &self,
        connector_type: &str,
        role_ids: &[i64],
    ) -> Result<Vec<String>, DbErr> {
        self.get_sets_by_entities(connector_type, SetEntityType::Role, role_ids)
            .await
    }

    /// Sets granted to any of the provided EVE corporation IDs
    pub async fn get_corporation_sets(
        &self,
        connector_type: &str,
        corporation_ids: &[i64],
    ) -> Result<Vec<String>, DbErr> {
        self.get_sets_by_entities(connector_type, SetEntityType::Corporation, corporation_ids)
            .await
    }

    /// Sets granted to any of the provided corporation title record IDs
    pub async fn get_title_sets(
        &self,
        connector_type: &str,
        title_ids: &[i64],
    ) -> Result<Vec<String>, DbErr> {
        self.get_sets_by_entities(connector_type, SetEntityType::Title, title_ids)
            .await
    }

    /// Sets granted to any of the provided EVE alliance IDs
    pub async fn get_alliance_sets(
        &self,
        connector_type: &str,
        alliance_ids: &[i64],
    ) -> Result<Vec<String>, DbErr> {
        self.get_sets_by_entities(connector_type, SetEntityType::Alliance, alliance_ids)
            .await
    }

    /// Sets granted to any of the provided squads
    pub async fn get_squad_sets(
        &self,
        connector_type: &str,
        squad_ids: &[i64],
    ) -> Result<Vec<String>, DbErr> {
        self.get_sets_by_entities(connector_type, SetEntityType::Squad, squad_ids)
            .await
    }

    /// Sets flagged as public
    pub async fn get_public_sets(&self, connector_type: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::ConnectorSet::find()
            .select_only()
            .column(entity::connector_set::Column::ConnectorId)
            .distinct()
            .filter(entity::connector_set::Column::ConnectorType.eq(connector_type))
            .filter(entity::connector_set::Column::IsPublic.eq(true))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Search the sets of a connector type by name
    pub async fn search(
        &self,
        connector_type: &str,
        query: &str,
    ) -> Result<Vec<SetModel>, DbErr> {
        entity::prelude::ConnectorSet::find()
            .filter(entity::connector_set::Column::ConnectorType.eq(connector_type))
            .filter(contains_ignore_case(entity::connector_set::Column::Name, query))
            .order_by_asc(entity::connector_set::Column::Name)
            .all(self.db)
            .await
    }

    async fn get_sets_by_entities(
        &self,
        connector_type: &str,
        entity_type: SetEntityType,
        entity_ids: &[i64],
    ) -> Result<Vec<String>, DbErr> {
        if entity_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ConnectorSet::find()
            .select_only()
            .column(entity::connector_set::Column::ConnectorId)
            .distinct()
            .inner_join(entity::prelude::ConnectorSetEntity)
            .filter(entity::connector_set::Column::ConnectorType.eq(connector_type))
            .filter(entity::connector_set_entity::Column::EntityType.eq(entity_type))
            .filter(
                entity::connector_set_entity::Column::EntityId.is_in(entity_ids.iter().copied()),
            )
            .into_tuple()
            .all(self.db)
            .await
    }
}
