use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_eve_character::EveCharacter;

static FK_REFRESH_TOKEN_CHARACTER_ID: &str = "fk-heimdall_refresh_token-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeimdallRefreshToken::Table)
                    .if_not_exists()
                    .col(pk_auto(HeimdallRefreshToken::Id))
                    .col(integer_uniq(HeimdallRefreshToken::CharacterId))
                    .col(text(HeimdallRefreshToken::Token))
                    .col(timestamp_null(HeimdallRefreshToken::RevokedAt))
                    .col(timestamp(HeimdallRefreshToken::CreatedAt))
                    .col(timestamp(HeimdallRefreshToken::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REFRESH_TOKEN_CHARACTER_ID)
                    .from_tbl(HeimdallRefreshToken::Table)
                    .from_col(HeimdallRefreshToken::CharacterId)
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
                    .name(FK_REFRESH_TOKEN_CHARACTER_ID)
                    .table(HeimdallRefreshToken::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HeimdallRefreshToken::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum HeimdallRefreshToken {
    Table,
    Id,
    CharacterId,
    Token,
    RevokedAt,
    CreatedAt,
    UpdatedAt,
}
