use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    notification::{entities::Notification, ports::NotificationRepository},
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationRepository {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryNotificationRepository {
    pub async fn for_user(&self, user_id: &str) -> Vec<Notification> {
        self.notifications
            .read()
            .await
            .iter()
            .filter(|notification| notification.user_id == user_id)
            .cloned()
            .collect()
    }
}

impl NotificationRepository for InMemoryNotificationRepository {
    async fn create(&self, notification: Notification) -> Result<Notification, CoreError> {
        self.notifications.write().await.push(notification.clone());
        Ok(notification)
    }
}
