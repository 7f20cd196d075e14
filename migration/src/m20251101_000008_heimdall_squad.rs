use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000005_heimdall_user::HeimdallUser;

static IDX_SQUAD_MEMBER_USER_ID: &str = "idx-heimdall_squad_member-user_id";
static FK_SQUAD_MEMBER_SQUAD_ID: &str = "fk-heimdall_squad_member-squad_id";
static FK_SQUAD_MEMBER_USER_ID: &str = "fk-heimdall_squad_member-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeimdallSquad::Table)
                    .if_not_exists()
                    .col(pk_auto(HeimdallSquad::Id))
                    .col(string(HeimdallSquad::Name))
                    .col(timestamp(HeimdallSquad::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HeimdallSquadMember::Table)
                    .if_not_exists()
                    .col(pk_auto(HeimdallSquadMember::Id))
                    .col(integer(HeimdallSquadMember::SquadId))
                    .col(integer(HeimdallSquadMember::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SQUAD_MEMBER_USER_ID)
                    .table(HeimdallSquadMember::Table)
                    .col(HeimdallSquadMember::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SQUAD_MEMBER_SQUAD_ID)
                    .from_tbl(HeimdallSquadMember::Table)
                    .from_col(HeimdallSquadMember::SquadId)
                    .to_tbl(HeimdallSquad::Table)
                    .to_col(HeimdallSquad::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SQUAD_MEMBER_USER_ID)
                    .from_tbl(HeimdallSquadMember::Table)
                    .from_col(HeimdallSquadMember::UserId)
                    .to_tbl(HeimdallUser::Table)
                    .to_col(HeimdallUser::Id)
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
                    .name(FK_SQUAD_MEMBER_USER_ID)
                    .table(HeimdallSquadMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SQUAD_MEMBER_SQUAD_ID)
                    .table(HeimdallSquadMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HeimdallSquadMember::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(HeimdallSquad::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum HeimdallSquad {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum HeimdallSquadMember {
    Table,
    Id,
    SquadId,
    UserId,
}
