use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{entities::UserProfile, ports::UserDirectory},
    },
    entity::user_profiles::Entity,
};

/// Optional display profiles stored in `user_profiles`.
#[derive(Debug, Clone)]
pub struct PostgresUserDirectory {
    pub db: DatabaseConnection,
}

impl PostgresUserDirectory {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserDirectory for PostgresUserDirectory {
    async fn get_profile(&self, user_id: String) -> Result<Option<UserProfile>, CoreError> {
        let model = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user profile: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(model.map(UserProfile::from))
    }
}
