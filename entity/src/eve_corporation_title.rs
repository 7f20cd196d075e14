use sea_orm::entity::prelude::*;

/// A title defined by a corporation. `title_id` is the in-game title ID, unique per corporation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "eve_corporation_title")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub corporation_id: i64,
    pub title_id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::eve_character_title::Entity")]
    EveCharacterTitle,
}

impl Related<super::eve_character_title::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCharacterTitle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
