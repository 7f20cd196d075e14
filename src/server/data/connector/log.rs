use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::model::db::ConnectorLogModel;

/// Writes connector events to `connector_log`.
pub struct ConnectorLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConnectorLogRepository<'a, C> {
    /// Creates a new instance of [`ConnectorLogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Persist a connector log entry
    ///
    /// # Arguments
    /// - `connector_type`: Connector the entry belongs to
    /// - `level`: Lowercase level name, e.g. `error`
    /// - `category`: Free-form category of the event
    /// - `message`: Event message
    pub async fn create(
        &self,
        connector_type: &str,
        level: &str,
        category: &str,
        message: &str,
    ) -> Result<ConnectorLogModel, DbErr> {
        let log = entity::connector_log::ActiveModel {
            connector_type: ActiveValue::Set(connector_type.to_string()),
            level: ActiveValue::Set(level.to_string()),
            category: ActiveValue::Set(category.to_string()),
            message: ActiveValue::Set(message.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        log.insert(self.db).await
    }
}
