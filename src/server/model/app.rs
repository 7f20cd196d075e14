use sea_orm::DatabaseConnection;

use crate::server::config::ConnectorConfig;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Connector settings
    pub connector: ConnectorConfig,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            connector: ConnectorConfig::default(),
        }
    }
}
