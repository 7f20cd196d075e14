use sea_orm::entity::prelude::*;

/// Kind of entity a set grants membership to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SetEntityType {
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "role")]
    Role,
    #[sea_orm(string_value = "corporation")]
    Corporation,
    #[sea_orm(string_value = "title")]
    Title,
    #[sea_orm(string_value = "alliance")]
    Alliance,
    #[sea_orm(string_value = "squad")]
    Squad,
}

/// Membership criterion of a set.
///
/// The meaning of `entity_id` depends on `entity_type`: user, role, squad and title
/// criteria hold record IDs while corporation and alliance criteria hold EVE Online IDs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "connector_set_entity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub set_id: i32,
    pub entity_type: SetEntityType,
    pub entity_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::connector_set::Entity",
        from = "Column::SetId",
        to = "super::connector_set::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ConnectorSet,
}

impl Related<super::connector_set::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConnectorSet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
