use sea_orm::entity::prelude::*;

/// Binding between a Heimdall user and their account on a third party platform.
///
/// At most one binding exists per `(connector_type, user_id)`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "connector_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub connector_type: String,
    pub connector_id: String,
    pub connector_name: String,
    pub user_id: i32,
    pub unique_id: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::heimdall_user::Entity",
        from = "Column::UserId",
        to = "super::heimdall_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    HeimdallUser,
}

impl Related<super::heimdall_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
