use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::OnConflict,
};
use tracing::error;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        notification::ports::DeviceTokenRepository,
    },
    entity::user_fcm_tokens::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresDeviceTokenRepository {
    pub db: DatabaseConnection,
}

impl PostgresDeviceTokenRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DeviceTokenRepository for PostgresDeviceTokenRepository {
    async fn list_tokens(&self, user_id: String) -> Result<Vec<String>, CoreError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list push tokens: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(models.into_iter().map(|model| model.token).collect())
    }

    async fn register(&self, user_id: String, token: String) -> Result<(), CoreError> {
        let (now, _) = generate_timestamp();
        let active_model = ActiveModel {
            user_id: Set(user_id),
            token: Set(token),
            created_at: Set(now.fixed_offset()),
        };

        Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::Token])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to register push token: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(())
    }

    async fn delete_tokens(&self, user_id: String, tokens: Vec<String>) -> Result<(), CoreError> {
        if tokens.is_empty() {
            return Ok(());
        }

        Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Token.is_in(tokens))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete push tokens: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(())
    }
}
