use sea_orm::entity::prelude::*;

/// Cached EVE Online character with its current affiliation.
///
/// `corporation_id` and `alliance_id` are EVE Online IDs, not record IDs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "eve_character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub character_id: i64,
    pub name: String,
    pub corporation_id: i64,
    pub alliance_id: Option<i64>,
    pub created_at: DateTime,
    pub affiliation_updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::eve_character_title::Entity")]
    EveCharacterTitle,
    #[sea_orm(has_one = "super::heimdall_refresh_token::Entity")]
    HeimdallRefreshToken,
    #[sea_orm(has_one = "super::heimdall_user_character::Entity")]
    HeimdallUserCharacter,
}

impl Related<super::eve_character_title::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCharacterTitle.def()
    }
}

impl Related<super::heimdall_refresh_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallRefreshToken.def()
    }
}

impl Related<super::heimdall_user_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallUserCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
