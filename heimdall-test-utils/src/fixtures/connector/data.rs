use chrono::Utc;
use entity::connector_set_entity::SetEntityType;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    fixtures::connector::ConnectorFixtures,
    model::{ConnectorUserModel, SetEntityModel, SetModel},
};

impl<'a> ConnectorFixtures<'a> {
    /// Insert a set named `Set {connector_id}`.
    pub async fn insert_set(
        &self,
        connector_type: &str,
        connector_id: &str,
        is_public: bool,
    ) -> Result<SetModel, TestError> {
        self.insert_named_set(
            connector_type,
            connector_id,
            &format!("Set {}", connector_id),
            is_public,
        )
        .await
    }

    /// Insert a set with an explicit name.
    pub async fn insert_named_set(
        &self,
        connector_type: &str,
        connector_id: &str,
        name: &str,
        is_public: bool,
    ) -> Result<SetModel, TestError> {
        let set = entity::connector_set::ActiveModel {
            connector_type: ActiveValue::Set(connector_type.to_string()),
            connector_id: ActiveValue::Set(connector_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            is_public: ActiveValue::Set(is_public),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(set.insert(&self.setup.db).await?)
    }

    /// Add a membership criterion to a set.
    pub async fn insert_set_entity(
        &self,
        set_id: i32,
        entity_type: SetEntityType,
        entity_id: i64,
    ) -> Result<SetEntityModel, TestError> {
        let set_entity = entity::connector_set_entity::ActiveModel {
            set_id: ActiveValue::Set(set_id),
            entity_type: ActiveValue::Set(entity_type),
            entity_id: ActiveValue::Set(entity_id),
            ..Default::default()
        };

        Ok(set_entity.insert(&self.setup.db).await?)
    }

    /// Link a user to a platform account with ID `{connector_type}-{user_id}`.
    pub async fn insert_connector_user(
        &self,
        connector_type: &str,
        user_id: i32,
    ) -> Result<ConnectorUserModel, TestError> {
        let connector_user = entity::connector_user::ActiveModel {
            connector_type: ActiveValue::Set(connector_type.to_string()),
            connector_id: ActiveValue::Set(format!("{}-{}", connector_type, user_id)),
            connector_name: ActiveValue::Set("Test User".to_string()),
            user_id: ActiveValue::Set(user_id),
            unique_id: ActiveValue::Set(format!("{}", user_id)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(connector_user.insert(&self.setup.db).await?)
    }
}
