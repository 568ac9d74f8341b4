use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{entities::MealPlan, ports::MealPlanRepository},
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryMealPlanRepository {
    plans: Arc<RwLock<HashMap<(String, NaiveDate), MealPlan>>>,
}

impl InMemoryMealPlanRepository {
    pub async fn get(&self, user_id: &str, date: NaiveDate) -> Option<MealPlan> {
        self.plans
            .read()
            .await
            .get(&(user_id.to_string(), date))
            .cloned()
    }

    pub async fn count(&self) -> usize {
        self.plans.read().await.len()
    }
}

impl MealPlanRepository for InMemoryMealPlanRepository {
    async fn upsert(&self, user_id: String, plan: MealPlan) -> Result<MealPlan, CoreError> {
        self.plans
            .write()
            .await
            .insert((user_id, plan.date), plan.clone());
        Ok(plan)
    }
}
