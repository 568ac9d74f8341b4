use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError, notification::ports::DeviceTokenRepository,
};

/// Device tokens per user, in registration order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeviceTokenRepository {
    tokens: Arc<RwLock<HashMap<String, Vec<String>>>>,
}

impl InMemoryDeviceTokenRepository {
    pub async fn register_for(&self, user_id: &str, token: &str) {
        let mut tokens = self.tokens.write().await;
        let list = tokens.entry(user_id.to_string()).or_default();
        if !list.iter().any(|existing| existing == token) {
            list.push(token.to_string());
        }
    }

    pub async fn tokens_of(&self, user_id: &str) -> Vec<String> {
        self.tokens
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl DeviceTokenRepository for InMemoryDeviceTokenRepository {
    async fn list_tokens(&self, user_id: String) -> Result<Vec<String>, CoreError> {
        Ok(self.tokens_of(&user_id).await)
    }

    async fn register(&self, user_id: String, token: String) -> Result<(), CoreError> {
        self.register_for(&user_id, &token).await;
        Ok(())
    }

    async fn delete_tokens(&self, user_id: String, tokens: Vec<String>) -> Result<(), CoreError> {
        if let Some(list) = self.tokens.write().await.get_mut(&user_id) {
            list.retain(|token| !tokens.contains(token));
        }
        Ok(())
    }
}
