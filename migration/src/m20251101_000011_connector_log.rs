use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConnectorLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ConnectorLog::Id))
                    .col(string(ConnectorLog::ConnectorType))
                    .col(string(ConnectorLog::Level))
                    .col(string(ConnectorLog::Category))
                    .col(text(ConnectorLog::Message))
                    .col(timestamp(ConnectorLog::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConnectorLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ConnectorLog {
    Table,
    Id,
    ConnectorType,
    Level,
    Category,
    Message,
    CreatedAt,
}
