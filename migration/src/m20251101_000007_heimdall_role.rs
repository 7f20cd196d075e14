use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000005_heimdall_user::HeimdallUser;

static IDX_USER_ROLE_USER_ID: &str = "idx-heimdall_user_role-user_id";
static FK_USER_ROLE_USER_ID: &str = "fk-heimdall_user_role-user_id";
static FK_USER_ROLE_ROLE_ID: &str = "fk-heimdall_user_role-role_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeimdallRole::Table)
                    .if_not_exists()
                    .col(pk_auto(HeimdallRole::Id))
                    .col(string_uniq(HeimdallRole::Title))
                    .col(timestamp(HeimdallRole::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HeimdallUserRole::Table)
                    .if_not_exists()
                    .col(pk_auto(HeimdallUserRole::Id))
                    .col(integer(HeimdallUserRole::UserId))
                    .col(integer(HeimdallUserRole::RoleId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_ROLE_USER_ID)
                    .table(HeimdallUserRole::Table)
                    .col(HeimdallUserRole::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_ROLE_USER_ID)
                    .from_tbl(HeimdallUserRole::Table)
                    .from_col(HeimdallUserRole::UserId)
                    .to_tbl(HeimdallUser::Table)
                    .to_col(HeimdallUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_ROLE_ROLE_ID)
                    .from_tbl(HeimdallUserRole::Table)
                    .from_col(HeimdallUserRole::RoleId)
                    .to_tbl(HeimdallRole::Table)
                    .to_col(HeimdallRole::Id)
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
                    .name(FK_USER_ROLE_ROLE_ID)
                    .table(HeimdallUserRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_ROLE_USER_ID)
                    .table(HeimdallUserRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HeimdallUserRole::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(HeimdallRole::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum HeimdallRole {
    Table,
    Id,
    Title,
    CreatedAt,
}

#[derive(DeriveIden)]
enum HeimdallUserRole {
    Table,
    Id,
    UserId,
    RoleId,
}
