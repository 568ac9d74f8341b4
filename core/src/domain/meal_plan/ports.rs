use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    meal_plan::{entities::MealPlan, value_objects::SaveMealPlanInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait MealPlanRepository: Send + Sync {
    /// Writes the plan for `(user_id, plan.date)`, replacing the fields it carries.
    fn upsert(
        &self,
        user_id: String,
        plan: MealPlan,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;
}

pub trait MealPlanService: Send + Sync {
    fn save_meal_plan(
        &self,
        identity: Identity,
        input: SaveMealPlanInput,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;
}
