use sea_orm::entity::prelude::*;

/// A group on a third party platform whose members are synced by a connector.
///
/// `connector_id` is the platform's own identifier for the group.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "connector_set")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub connector_type: String,
    pub connector_id: String,
    pub name: String,
    pub is_public: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::connector_set_entity::Entity")]
    ConnectorSetEntity,
}

impl Related<super::connector_set_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConnectorSetEntity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
