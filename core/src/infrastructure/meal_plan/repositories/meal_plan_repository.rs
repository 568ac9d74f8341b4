use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict};
use serde_json::Value;
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        meal_plan::{entities::MealPlan, ports::MealPlanRepository},
    },
    entity::meal_plans::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresMealPlanRepository {
    pub db: DatabaseConnection,
}

impl PostgresMealPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MealPlanRepository for PostgresMealPlanRepository {
    async fn upsert(&self, user_id: String, plan: MealPlan) -> Result<MealPlan, CoreError> {
        let active_model = ActiveModel {
            user_id: Set(user_id),
            date: Set(plan.date),
            meals: Set(Value::Array(plan.meals.clone())),
            source: Set(plan.source.clone()),
            updated_at: Set(plan.updated_at.fixed_offset()),
        };

        Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::Date])
                    .update_columns([Column::Meals, Column::Source, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert meal plan: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(plan)
    }
}
