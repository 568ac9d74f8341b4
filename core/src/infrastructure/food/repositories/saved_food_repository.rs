use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, sea_query::OnConflict,
};
use tracing::error;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        food::ports::SavedFoodRepository,
    },
    entity::user_saved_foods::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresSavedFoodRepository {
    pub db: DatabaseConnection,
}

impl PostgresSavedFoodRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SavedFoodRepository for PostgresSavedFoodRepository {
    async fn recent_saved_ids(
        &self,
        user_id: String,
        limit: u64,
    ) -> Result<Vec<String>, CoreError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::SavedAt)
            .order_by_asc(Column::FoodId)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load saved foods: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(models.into_iter().map(|model| model.food_id).collect())
    }

    async fn save(&self, user_id: String, food_id: String) -> Result<(), CoreError> {
        let (now, _) = generate_timestamp();
        let active_model = ActiveModel {
            user_id: Set(user_id),
            food_id: Set(food_id),
            saved_at: Set(now.fixed_offset()),
        };

        Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::FoodId])
                    .update_column(Column::SavedAt)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to save food: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(())
    }

    async fn unsave(&self, user_id: String, food_id: String) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::FoodId.eq(food_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to unsave food: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(())
    }
}
