pub use sea_orm_migration::prelude::*;

mod m20251101_000001_eve_alliance;
mod m20251101_000002_eve_corporation;
mod m20251101_000003_eve_character;
mod m20251101_000004_eve_title;
mod m20251101_000005_heimdall_user;
mod m20251101_000006_heimdall_refresh_token;
mod m20251101_000007_heimdall_role;
mod m20251101_000008_heimdall_squad;
mod m20251101_000009_connector_set;
mod m20251101_000010_connector_user;
mod m20251101_000011_connector_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_eve_alliance::Migration),
            Box::new(m20251101_000002_eve_corporation::Migration),
            Box::new(m20251101_000003_eve_character::Migration),
            Box::new(m20251101_000004_eve_title::Migration),
            Box::new(m20251101_000005_heimdall_user::Migration),
            Box::new(m20251101_000006_heimdall_refresh_token::Migration),
            Box::new(m20251101_000007_heimdall_role::Migration),
            Box::new(m20251101_000008_heimdall_squad::Migration),
            Box::new(m20251101_000009_connector_set::Migration),
            Box::new(m20251101_000010_connector_user::Migration),
            Box::new(m20251101_000011_connector_log::Migration),
        ]
    }
}
