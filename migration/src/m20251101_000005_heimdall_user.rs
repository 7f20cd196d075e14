use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_eve_character::EveCharacter;

static FK_USER_MAIN_CHARACTER_ID: &str = "fk-heimdall_user-main_character_id";
static IDX_USER_CHARACTER_USER_ID: &str = "idx-heimdall_user_character-user_id";
static FK_USER_CHARACTER_USER_ID: &str = "fk-heimdall_user_character-user_id";
static FK_USER_CHARACTER_CHARACTER_ID: &str = "fk-heimdall_user_character-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeimdallUser::Table)
                    .if_not_exists()
                    .col(pk_auto(HeimdallUser::Id))
                    .col(string(HeimdallUser::Name))
                    .col(integer_null(HeimdallUser::MainCharacterId))
                    .col(boolean(HeimdallUser::Active))
                    .col(timestamp(HeimdallUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_MAIN_CHARACTER_ID)
                    .from_tbl(HeimdallUser::Table)
                    .from_col(HeimdallUser::MainCharacterId)
                    .to_tbl(EveCharacter::Table)
                    .to_col(EveCharacter::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HeimdallUserCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(HeimdallUserCharacter::Id))
                    .col(integer(HeimdallUserCharacter::UserId))
                    .col(integer_uniq(HeimdallUserCharacter::CharacterId))
                    .col(string(HeimdallUserCharacter::OwnerHash))
                    .col(timestamp(HeimdallUserCharacter::CreatedAt))
                    .col(timestamp(HeimdallUserCharacter::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_CHARACTER_USER_ID)
                    .table(HeimdallUserCharacter::Table)
                    .col(HeimdallUserCharacter::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_CHARACTER_USER_ID)
                    .from_tbl(HeimdallUserCharacter::Table)
                    .from_col(HeimdallUserCharacter::UserId)
                    .to_tbl(HeimdallUser::Table)
                    .to_col(HeimdallUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_CHARACTER_CHARACTER_ID)
                    .from_tbl(HeimdallUserCharacter::Table)
                    .from_col(HeimdallUserCharacter::CharacterId)
                    .to_tbl(EveCharacter::Table)
                    .to_col(EveCharacter::Id)
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
                    .name(FK_USER_CHARACTER_CHARACTER_ID)
                    .table(HeimdallUserCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_CHARACTER_USER_ID)
                    .table(HeimdallUserCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HeimdallUserCharacter::Table).to_owned())
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_MAIN_CHARACTER_ID)
                    .table(HeimdallUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HeimdallUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HeimdallUser {
    Table,
    Id,
    Name,
    MainCharacterId,
    Active,
    CreatedAt,
}

#[derive(DeriveIden)]
enum HeimdallUserCharacter {
    Table,
    Id,
    UserId,
    CharacterId,
    OwnerHash,
    CreatedAt,
    UpdatedAt,
}
