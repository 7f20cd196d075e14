use sea_orm::entity::prelude::*;

/// Identity user owning one or more EVE Online characters.
///
/// `main_character_id` references an `eve_character` record ID and may be unset while the
/// user has no main character selected.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heimdall_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub main_character_id: Option<i32>,
    pub active: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::heimdall_user_character::Entity")]
    HeimdallUserCharacter,
    #[sea_orm(has_many = "super::heimdall_user_role::Entity")]
    HeimdallUserRole,
    #[sea_orm(has_many = "super::heimdall_squad_member::Entity")]
    HeimdallSquadMember,
    #[sea_orm(has_many = "super::connector_user::Entity")]
    ConnectorUser,
}

impl Related<super::heimdall_user_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallUserCharacter.def()
    }
}

impl Related<super::heimdall_user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallUserRole.def()
    }
}

impl Related<super::heimdall_squad_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallSquadMember.def()
    }
}

impl Related<super::connector_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConnectorUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
