use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{common::entities::app_errors::CoreError, food::ports::SavedFoodRepository};

/// Saved food ids per user, oldest first.
#[derive(Debug, Clone, Default)]
pub struct InMemorySavedFoodRepository {
    saves: Arc<RwLock<HashMap<String, Vec<String>>>>,
}

impl InMemorySavedFoodRepository {
    /// Marks `food_id` as the user's most recent save.
    pub async fn add(&self, user_id: &str, food_id: &str) {
        let mut saves = self.saves.write().await;
        let list = saves.entry(user_id.to_string()).or_default();
        list.retain(|id| id != food_id);
        list.push(food_id.to_string());
    }
}

impl SavedFoodRepository for InMemorySavedFoodRepository {
    async fn recent_saved_ids(
        &self,
        user_id: String,
        limit: u64,
    ) -> Result<Vec<String>, CoreError> {
        let saves = self.saves.read().await;

        Ok(saves
            .get(&user_id)
            .map(|list| list.iter().rev().take(limit as usize).cloned().collect())
            .unwrap_or_default())
    }

    async fn save(&self, user_id: String, food_id: String) -> Result<(), CoreError> {
        self.add(&user_id, &food_id).await;
        Ok(())
    }

    async fn unsave(&self, user_id: String, food_id: String) -> Result<(), CoreError> {
        if let Some(list) = self.saves.write().await.get_mut(&user_id) {
            list.retain(|id| *id != food_id);
        }
        Ok(())
    }
}
