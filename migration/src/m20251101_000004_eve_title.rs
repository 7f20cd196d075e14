use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_eve_character::EveCharacter;

static IDX_EVE_CORPORATION_TITLE_UNIQUE: &str = "idx-eve_corporation_title-corporation_id-title_id";
static IDX_EVE_CHARACTER_TITLE_CHARACTER_ID: &str = "idx-eve_character_title-character_id";
static FK_EVE_CHARACTER_TITLE_CHARACTER_ID: &str = "fk-eve_character_title-character_id";
static FK_EVE_CHARACTER_TITLE_TITLE_ID: &str = "fk-eve_character_title-title_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveCorporationTitle::Table)
                    .if_not_exists()
                    .col(pk_auto(EveCorporationTitle::Id))
                    .col(big_integer(EveCorporationTitle::CorporationId))
                    .col(big_integer(EveCorporationTitle::TitleId))
                    .col(string(EveCorporationTitle::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVE_CORPORATION_TITLE_UNIQUE)
                    .table(EveCorporationTitle::Table)
                    .col(EveCorporationTitle::CorporationId)
                    .col(EveCorporationTitle::TitleId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EveCharacterTitle::Table)
                    .if_not_exists()
                    .col(pk_auto(EveCharacterTitle::Id))
                    .col(integer(EveCharacterTitle::CharacterId))
                    .col(integer(EveCharacterTitle::TitleId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVE_CHARACTER_TITLE_CHARACTER_ID)
                    .table(EveCharacterTitle::Table)
                    .col(EveCharacterTitle::CharacterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVE_CHARACTER_TITLE_CHARACTER_ID)
                    .from_tbl(EveCharacterTitle::Table)
                    .from_col(EveCharacterTitle::CharacterId)
                    .to_tbl(EveCharacter::Table)
                    .to_col(EveCharacter::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVE_CHARACTER_TITLE_TITLE_ID)
                    .from_tbl(EveCharacterTitle::Table)
                    .from_col(EveCharacterTitle::TitleId)
                    .to_tbl(EveCorporationTitle::Table)
                    .to_col(EveCorporationTitle::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EVE_CHARACTER_TITLE_TITLE_ID)
                    .table(EveCharacterTitle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EVE_CHARACTER_TITLE_CHARACTER_ID)
                    .table(EveCharacterTitle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EveCharacterTitle::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(EveCorporationTitle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EveCorporationTitle {
    Table,
    Id,
    CorporationId,
    TitleId,
    Name,
}

#[derive(DeriveIden)]
enum EveCharacterTitle {
    Table,
    Id,
    CharacterId,
    TitleId,
}
