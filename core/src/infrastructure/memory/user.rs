use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::UserProfile, ports::UserDirectory},
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    profiles: Arc<RwLock<HashMap<String, UserProfile>>>,
}

impl InMemoryUserDirectory {
    pub async fn insert(&self, profile: UserProfile) {
        self.profiles
            .write()
            .await
            .insert(profile.id.clone(), profile);
    }
}

impl UserDirectory for InMemoryUserDirectory {
    async fn get_profile(&self, user_id: String) -> Result<Option<UserProfile>, CoreError> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }
}
