use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000005_heimdall_user::HeimdallUser;

static IDX_CONNECTOR_USER_USER_ID: &str = "idx-connector_user-user_id";
static IDX_CONNECTOR_USER_UNIQUE: &str = "idx-connector_user-connector_type-user_id";
static FK_CONNECTOR_USER_USER_ID: &str = "fk-connector_user-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConnectorUser::Table)
                    .if_not_exists()
                    .col(pk_auto(ConnectorUser::Id))
                    .col(string(ConnectorUser::ConnectorType))
                    .col(string(ConnectorUser::ConnectorId))
                    .col(string(ConnectorUser::ConnectorName))
                    .col(integer(ConnectorUser::UserId))
                    .col(string(ConnectorUser::UniqueId))
                    .col(timestamp(ConnectorUser::CreatedAt))
                    .col(timestamp(ConnectorUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONNECTOR_USER_USER_ID)
                    .table(ConnectorUser::Table)
                    .col(ConnectorUser::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONNECTOR_USER_UNIQUE)
                    .table(ConnectorUser::Table)
                    .col(ConnectorUser::ConnectorType)
                    .col(ConnectorUser::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONNECTOR_USER_USER_ID)
                    .from_tbl(ConnectorUser::Table)
                    .from_col(ConnectorUser::UserId)
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
                    .name(FK_CONNECTOR_USER_USER_ID)
                    .table(ConnectorUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ConnectorUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ConnectorUser {
    Table,
    Id,
    ConnectorType,
    ConnectorId,
    ConnectorName,
    UserId,
    UniqueId,
    CreatedAt,
    UpdatedAt,
}
