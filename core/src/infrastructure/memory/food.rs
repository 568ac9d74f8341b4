use std::collections::HashSet;
use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{entities::FoodItem, ports::FoodRepository},
};

/// Catalog kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFoodRepository {
    items: Arc<RwLock<Vec<FoodItem>>>,
}

impl InMemoryFoodRepository {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Loads a catalog from a JSON array of documents, each carrying its
    /// `id` next to its attributes.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let documents: Vec<Map<String, Value>> = serde_json::from_str(raw).map_err(|e| {
            error!("Invalid food catalog: {}", e);
            CoreError::BadRequest(format!("invalid food catalog: {}", e))
        })?;

        let mut items = Vec::with_capacity(documents.len());
        for mut document in documents {
            let id = match document.remove("id") {
                Some(Value::String(id)) if !id.is_empty() => id,
                _ => {
                    return Err(CoreError::BadRequest(
                        "every food document needs a string id".to_string(),
                    ));
                }
            };
            items.push(FoodItem::new(id, document));
        }

        Ok(Self::new(items))
    }

    /// Adds `item`, replacing an existing entry with the same id in place.
    pub async fn insert(&self, item: FoodItem) {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
    }

    pub async fn count(&self) -> usize {
        self.items.read().await.len()
    }
}

fn has_meal_type(item: &FoodItem, meal_type: &str) -> bool {
    match item.data.get("mealType") {
        Some(Value::Array(values)) => values
            .iter()
            .any(|value| value.as_str() == Some(meal_type)),
        _ => false,
    }
}

impl FoodRepository for InMemoryFoodRepository {
    async fn get_by_ids(&self, ids: Vec<String>) -> Result<Vec<FoodItem>, CoreError> {
        let wanted: HashSet<String> = ids.into_iter().collect();
        let items = self.items.read().await;

        Ok(items
            .iter()
            .filter(|item| wanted.contains(&item.id))
            .cloned()
            .collect())
    }

    async fn scan(&self, limit: u64) -> Result<Vec<FoodItem>, CoreError> {
        let items = self.items.read().await;
        Ok(items.iter().take(limit as usize).cloned().collect())
    }

    async fn find_by_meal_type(
        &self,
        meal_type: String,
        limit: u64,
    ) -> Result<Vec<FoodItem>, CoreError> {
        let items = self.items.read().await;

        Ok(items
            .iter()
            .filter(|item| has_meal_type(item, &meal_type))
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
