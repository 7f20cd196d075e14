use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heimdall_squad_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub squad_id: i32,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::heimdall_squad::Entity",
        from = "Column::SquadId",
        to = "super::heimdall_squad::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    HeimdallSquad,
    #[sea_orm(
        belongs_to = "super::heimdall_user::Entity",
        from = "Column::UserId",
        to = "super::heimdall_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    HeimdallUser,
}

impl Related<super::heimdall_squad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallSquad.def()
    }
}

impl Related<super::heimdall_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
