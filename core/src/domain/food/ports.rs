use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    food::entities::FoodItem,
};

/// Read access to the food catalog.
#[cfg_attr(test, mockall::automock)]
pub trait FoodRepository: Send + Sync {
    /// Looks up items by id. Unknown ids are skipped; order is not guaranteed.
    fn get_by_ids(
        &self,
        ids: Vec<String>,
    ) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;

    /// Returns up to `limit` items in catalog order.
    fn scan(&self, limit: u64) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;

    /// Returns up to `limit` items whose `mealType` list contains `meal_type` verbatim.
    fn find_by_meal_type(
        &self,
        meal_type: String,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;
}

/// The foods a user liked or bookmarked.
#[cfg_attr(test, mockall::automock)]
pub trait SavedFoodRepository: Send + Sync {
    /// Ids of the user's saved foods, most recent first.
    fn recent_saved_ids(
        &self,
        user_id: String,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn save(
        &self,
        user_id: String,
        food_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn unsave(
        &self,
        user_id: String,
        food_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait SavedFoodService: Send + Sync {
    fn save_food(
        &self,
        identity: Identity,
        food_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn unsave_food(
        &self,
        identity: Identity,
        food_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
