use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::Expr,
};
use serde_json::json;
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food::{entities::FoodItem, ports::FoodRepository},
    },
    entity::foods::{Column, Entity},
};

/// Catalog stored in `foods`, one JSONB document per row. Catalog order is id order.
#[derive(Debug, Clone)]
pub struct PostgresFoodRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FoodRepository for PostgresFoodRepository {
    async fn get_by_ids(&self, ids: Vec<String>) -> Result<Vec<FoodItem>, CoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = Entity::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load foods by id: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(models.into_iter().map(FoodItem::from).collect())
    }

    async fn scan(&self, limit: u64) -> Result<Vec<FoodItem>, CoreError> {
        let models = Entity::find()
            .order_by_asc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to scan foods: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(models.into_iter().map(FoodItem::from).collect())
    }

    async fn find_by_meal_type(
        &self,
        meal_type: String,
        limit: u64,
    ) -> Result<Vec<FoodItem>, CoreError> {
        // JSONB containment only matches when `mealType` is an array holding
        // the exact string.
        let models = Entity::find()
            .filter(Expr::cust_with_values(
                "data -> 'mealType' @> $1::jsonb",
                [json!([meal_type])],
            ))
            .order_by_asc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to query foods by mealType: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(models.into_iter().map(FoodItem::from).collect())
    }
}
