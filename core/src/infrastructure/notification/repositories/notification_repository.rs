use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        notification::{entities::Notification, ports::NotificationRepository},
    },
    entity::user_notifications::{ActiveModel, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresNotificationRepository {
    pub db: DatabaseConnection,
}

impl PostgresNotificationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl NotificationRepository for PostgresNotificationRepository {
    async fn create(&self, notification: Notification) -> Result<Notification, CoreError> {
        let active_model = ActiveModel {
            id: Set(notification.id.clone()),
            user_id: Set(notification.user_id.clone()),
            kind: Set(notification.kind.clone()),
            title: Set(notification.title.clone()),
            body: Set(notification.body.clone()),
            actor_id: Set(notification.actor_id.clone()),
            actor_name: Set(notification.actor_name.clone()),
            food_id: Set(notification.food_id.clone()),
            created_at: Set(notification.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create notification: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(Notification::from(created))
    }
}
