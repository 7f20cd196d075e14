use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heimdall_squad")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::heimdall_squad_member::Entity")]
    HeimdallSquadMember,
}

impl Related<super::heimdall_squad_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallSquadMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
