use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heimdall_role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::heimdall_user_role::Entity")]
    HeimdallUserRole,
}

impl Related<super::heimdall_user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallUserRole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
