use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::ConnectorUserModel;

/// Bindings between Heimdall users and platform accounts, one per user and connector type.
pub struct ConnectorUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConnectorUserRepository<'a, C> {
    /// Creates a new instance of [`ConnectorUserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a binding between a user and a platform account
    ///
    /// # Arguments
    /// - `connector_type`: Connector the binding belongs to
    /// - `user_id`: ID of the Heimdall user
    /// - `connector_id`: Account identifier on the platform
    /// - `connector_name`: Account display name on the platform
    /// - `unique_id`: Platform-specific unique identifier
    pub async fn create(
        &self,
        connector_type: &str,
        user_id: i32,
        connector_id: &str,
        connector_name: &str,
        unique_id: &str,
    ) -> Result<ConnectorUserModel, DbErr> {
        let connector_user = entity::connector_user::ActiveModel {
            connector_type: ActiveValue::Set(connector_type.to_string()),
            connector_id: ActiveValue::Set(connector_id.to_string()),
            connector_name: ActiveValue::Set(connector_name.to_string()),
            user_id: ActiveValue::Set(user_id),
            unique_id: ActiveValue::Set(unique_id.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        connector_user.insert(self.db).await
    }

    /// Get the binding of a user for a connector type
    pub async fn get_by_user_id(
        &self,
        connector_type: &str,
        user_id: i32,
    ) -> Result<Option<ConnectorUserModel>, DbErr> {
        entity::prelude::ConnectorUser::find()
            .filter(entity::connector_user::Column::ConnectorType.eq(connector_type))
            .filter(entity::connector_user::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Update the platform account of an existing binding
    ///
    /// # Returns
    /// - `Some` with the updated binding, or `None` if the binding does not exist
    pub async fn update(
        &self,
        id: i32,
        connector_id: &str,
        connector_name: &str,
        unique_id: &str,
    ) -> Result<Option<ConnectorUserModel>, DbErr> {
        let connector_user = match entity::prelude::ConnectorUser::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(connector_user) => connector_user,
            None => return Ok(None),
        };

        let mut connector_user_am = connector_user.into_active_model();
        connector_user_am.connector_id = ActiveValue::Set(connector_id.to_string());
        connector_user_am.connector_name = ActiveValue::Set(connector_name.to_string());
        connector_user_am.unique_id = ActiveValue::Set(unique_id.to_string());
        connector_user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let connector_user = connector_user_am.update(self.db).await?;

        Ok(Some(connector_user))
    }

    /// Deletes the binding of a user for a connector type
    ///
    /// Returns OK regardless of the binding existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, connector_type: &str, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ConnectorUser::delete_many()
            .filter(entity::connector_user::Column::ConnectorType.eq(connector_type))
            .filter(entity::connector_user::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }

    /// Get all bindings of a connector type, ordered by record ID
    ///
    /// Without a connector type no binding matches and an empty list is returned.
    pub async fn get_many_by_connector_type(
        &self,
        connector_type: Option<&str>,
    ) -> Result<Vec<ConnectorUserModel>, DbErr> {
        let Some(connector_type) = connector_type else {
            return Ok(Vec::new());
        };

        entity::prelude::ConnectorUser::find()
            .filter(entity::connector_user::Column::ConnectorType.eq(connector_type))
            .order_by_asc(entity::connector_user::Column::Id)
            .all(self.db)
            .await
    }
}
