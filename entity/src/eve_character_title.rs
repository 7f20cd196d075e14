use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "eve_character_title")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub character_id: i32,
    pub title_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::eve_character::Entity",
        from = "Column::CharacterId",
        to = "super::eve_character::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    EveCharacter,
    #[sea_orm(
        belongs_to = "super::eve_corporation_title::Entity",
        from = "Column::TitleId",
        to = "super::eve_corporation_title::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    EveCorporationTitle,
}

impl Related<super::eve_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCharacter.def()
    }
}

impl Related<super::eve_corporation_title::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCorporationTitle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
