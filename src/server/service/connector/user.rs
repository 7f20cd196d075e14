use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::ConnectorConfig,
    data::connector::user::ConnectorUserRepository,
    error::Error,
    model::db::ConnectorUserModel,
    service::connector::logger::{ConnectorEvent, EventLogger, LogLevel},
};

static LOG_CATEGORY: &str = "user";

/// Platform account of a Heimdall user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectorAccount {
    /// Account identifier on the platform
    pub connector_id: String,
    /// Account display name on the platform
    pub connector_name: String,
    /// Platform-specific unique identifier
    pub unique_id: String,
}

/// Manages bindings between Heimdall users and platform accounts.
///
/// Link and unlink operations are recorded through the [`EventLogger`]. A failure to record
/// them is traced and does not fail the operation, the binding is already committed.
pub struct ConnectorUserService<'a> {
    db: &'a DatabaseConnection,
    config: &'a ConnectorConfig,
}

impl<'a> ConnectorUserService<'a> {
    /// Creates a new instance of [`ConnectorUserService`]
    pub fn new(db: &'a DatabaseConnection, config: &'a ConnectorConfig) -> Self {
        Self { db, config }
    }

    /// Links a user to a platform account.
    ///
    /// A user holds a single binding per connector type, linking again replaces the account
    /// of the existing binding.
    ///
    /// # Returns
    /// - `Ok(ConnectorUserModel)` - The created or updated binding
    /// - `Err(Error::DbErr)` - The user does not exist or a query failed
    pub async fn link_user(
        &self,
        connector_type: &str,
        user_id: i32,
        account: &ConnectorAccount,
    ) -> Result<ConnectorUserModel, Error> {
        let connector_user_repo = ConnectorUserRepository::new(self.db);

        let existing = connector_user_repo
            .get_by_user_id(connector_type, user_id)
            .await?;

        let linked_user = match existing {
            Some(existing) => connector_user_repo
                .update(
                    existing.id,
                    &account.connector_id,
                    &account.connector_name,
                    &account.unique_id,
                )
                .await?
                .ok_or_else(|| {
                    Error::InternalError(format!(
                        "{} binding ID {} of user ID {} disappeared during update",
                        connector_type, existing.id, user_id
                    ))
                })?,
            None => {
                connector_user_repo
                    .create(
                        connector_type,
                        user_id,
                        &account.connector_id,
                        &account.connector_name,
                        &account.unique_id,
                    )
                    .await?
            }
        };

        self.log(
            connector_type,
            format!(
                "User ID {} linked to {} ({})",
                user_id, account.connector_name, account.connector_id
            ),
        )
        .await;

        Ok(linked_user)
    }

    /// Gets the binding of a user for a connector type.
    pub async fn get(
        &self,
        connector_type: &str,
        user_id: i32,
    ) -> Result<Option<ConnectorUserModel>, Error> {
        let connector_user_repo = ConnectorUserRepository::new(self.db);

        Ok(connector_user_repo
            .get_by_user_id(connector_type, user_id)
            .await?)
    }

    /// Removes the binding of a user for a connector type.
    ///
    /// # Returns
    /// - `Ok(true)` - The binding was removed
    /// - `Ok(false)` - The user had no binding for the connector type
    pub async fn unlink(&self, connector_type: &str, user_id: i32) -> Result<bool, Error> {
        let connector_user_repo = ConnectorUserRepository::new(self.db);

        let result = connector_user_repo.delete(connector_type, user_id).await?;
        if result.rows_affected == 0 {
            return Ok(false);
        }

        self.log(connector_type, format!("User ID {} unlinked", user_id))
            .await;

        Ok(true)
    }

    /// Lists the bindings of a connector type, nothing is listed without a connector type.
    pub async fn list(
        &self,
        connector_type: Option<&str>,
    ) -> Result<Vec<ConnectorUserModel>, Error> {
        let connector_user_repo = ConnectorUserRepository::new(self.db);

        Ok(connector_user_repo
            .get_many_by_connector_type(connector_type)
            .await?)
    }

    async fn log(&self, connector_type: &str, message: String) {
        let event = ConnectorEvent::new(connector_type, LogLevel::Info, LOG_CATEGORY, message);

        if let Err(e) = EventLogger::new(self.db, self.config).handle(&event).await {
            tracing::error!("Failed to record {} event: {}", connector_type, e);
        }
    }
}
