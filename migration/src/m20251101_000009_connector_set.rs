use sea_orm_migration::{prelude::*, schema::*};

static IDX_CONNECTOR_SET_UNIQUE: &str = "idx-connector_set-connector_type-connector_id";
static IDX_CONNECTOR_SET_ENTITY_LOOKUP: &str = "idx-connector_set_entity-entity_type-entity_id";
static FK_CONNECTOR_SET_ENTITY_SET_ID: &str = "fk-connector_set_entity-set_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConnectorSet::Table)
                    .if_not_exists()
                    .col(pk_auto(ConnectorSet::Id))
                    .col(string(ConnectorSet::ConnectorType))
                    .col(string(ConnectorSet::ConnectorId))
                    .col(string(ConnectorSet::Name))
                    .col(boolean(ConnectorSet::IsPublic))
                    .col(timestamp(ConnectorSet::CreatedAt))
                    .col(timestamp(ConnectorSet::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONNECTOR_SET_UNIQUE)
                    .table(ConnectorSet::Table)
                    .col(ConnectorSet::ConnectorType)
                    .col(ConnectorSet::ConnectorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ConnectorSetEntity::Table)
                    .if_not_exists()
                    .col(pk_auto(ConnectorSetEntity::Id))
                    .col(integer(ConnectorSetEntity::SetId))
                    .col(string_len(ConnectorSetEntity::EntityType, 16))
                    .col(big_integer(ConnectorSetEntity::EntityId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONNECTOR_SET_ENTITY_LOOKUP)
                    .table(ConnectorSetEntity::Table)
                    .col(ConnectorSetEntity::EntityType)
                    .col(ConnectorSetEntity::EntityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONNECTOR_SET_ENTITY_SET_ID)
                    .from_tbl(ConnectorSetEntity::Table)
                    .from_col(ConnectorSetEntity::SetId)
                    .to_tbl(ConnectorSet::Table)
                    .to_col(ConnectorSet::Id)
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
                    .name(FK_CONNECTOR_SET_ENTITY_SET_ID)
                    .table(ConnectorSetEntity::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ConnectorSetEntity::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ConnectorSet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ConnectorSet {
    Table,
    Id,
    ConnectorType,
    ConnectorId,
    Name,
    IsPublic,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ConnectorSetEntity {
    Table,
    Id,
    SetId,
    EntityType,
    EntityId,
}
