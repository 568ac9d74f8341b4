use tracing::instrument;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    comment::ports::CommentRepository,
    common::{
        batch::{fetch_in_batches, order_by_ids},
        entities::app_errors::CoreError,
        services::Service,
    },
    food::{
        entities::FoodItem,
        ports::{FoodRepository, SavedFoodRepository, SavedFoodService},
    },
    meal_plan::ports::MealPlanRepository,
    notification::ports::{DeviceTokenRepository, NotificationRepository, PushTransport},
    user::ports::UserDirectory,
};

impl<F, SF, MP, CM, UD, DT, NT, PT, TV> Service<F, SF, MP, CM, UD, DT, NT, PT, TV>
where
    F: FoodRepository,
    SF: SavedFoodRepository,
    MP: MealPlanRepository,
    CM: CommentRepository,
    UD: UserDirectory,
    DT: DeviceTokenRepository,
    NT: NotificationRepository,
    PT: PushTransport,
    TV: TokenVerifier,
{
    /// Loads the user's `limit` most recent saved foods, newest first.
    pub(crate) async fn load_saved_items(
        &self,
        user_id: &str,
        limit: u64,
    ) -> Result<Vec<FoodItem>, CoreError> {
        let saved_ids = self
            .saved_food_repository
            .recent_saved_ids(user_id.to_string(), limit)
            .await?;

        if saved_ids.is_empty() {
            return Ok(Vec::new());
        }

        let food_repository = &self.food_repository;
        let loaded = fetch_in_batches(&saved_ids, self.settings.id_batch_size, |chunk| {
            food_repository.get_by_ids(chunk)
        })
        .await?;

        Ok(order_by_ids(loaded, &saved_ids))
    }
}

impl<F, SF, MP, CM, UD, DT, NT, PT, TV> SavedFoodService
    for Service<F, SF, MP, CM, UD, DT, NT, PT, TV>
where
    F: FoodRepository,
    SF: SavedFoodRepository,
    MP: MealPlanRepository,
    CM: CommentRepository,
    UD: UserDirectory,
    DT: DeviceTokenRepository,
    NT: NotificationRepository,
    PT: PushTransport,
    TV: TokenVerifier,
{
    #[instrument(skip(self, identity), fields(uid = %identity.uid))]
    async fn save_food(&self, identity: Identity, food_id: String) -> Result<(), CoreError> {
        let food_id = food_id.trim().to_string();
        if food_id.is_empty() {
            return Err(CoreError::BadRequest("foodId required".to_string()));
        }

        let found = self
            .food_repository
            .get_by_ids(vec![food_id.clone()])
            .await?;
        if found.is_empty() {
            return Err(CoreError::NotFound);
        }

        self.saved_food_repository
            .save(identity.uid, food_id)
            .await
    }

    #[instrument(skip(self, identity), fields(uid = %identity.uid))]
    async fn unsave_food(&self, identity: Identity, food_id: String) -> Result<(), CoreError> {
        let food_id = food_id.trim().to_string();
        if food_id.is_empty() {
            return Err(CoreError::BadRequest("foodId required".to_string()));
        }

        self.saved_food_repository
            .unsave(identity.uid, food_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::{
        common::{entities::app_errors::CoreError, testing::Fixture},
        food::{entities::FoodItem, ports::SavedFoodService},
    };

    #[tokio::test]
    async fn test_saved_items_keep_recency_order_across_batches() {
        let fixture = Fixture::new();
        let ids: Vec<String> = (0..25).map(|i| format!("f{i:02}")).collect();
        for id in &ids {
            fixture
                .foods
                .insert(FoodItem::from_value(id.clone(), json!({})))
                .await;
        }
        // Saved oldest first, so f24 is the most recent.
        for id in &ids {
            fixture.saved.add("u1", id).await;
        }

        let service = fixture.service();
        let loaded = service.load_saved_items("u1", 12).await.unwrap();

        let loaded_ids: Vec<&str> = loaded.iter().map(|item| item.id.as_str()).collect();
        let expected: Vec<String> = (13..25).rev().map(|i| format!("f{i:02}")).collect();
        assert_eq!(loaded_ids, expected);
    }

    #[tokio::test]
    async fn test_saved_ids_missing_from_catalog_are_skipped() {
        let fixture = Fixture::new();
        fixture
            .foods
            .insert(FoodItem::from_value("kept", json!({})))
            .await;
        fixture.saved.add("u1", "kept").await;
        fixture.saved.add("u1", "deleted").await;

        let loaded = fixture.service().load_saved_items("u1", 10).await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "kept");
    }

    #[tokio::test]
    async fn test_save_unknown_food_is_not_found() {
        let fixture = Fixture::new();
        let result = fixture
            .service()
            .save_food(Fixture::identity("u1"), "ghost".to_string())
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_save_and_unsave_round_trip() {
        let fixture = Fixture::new();
        fixture
            .foods
            .insert(FoodItem::from_value("pho", json!({})))
            .await;
        let service = fixture.service();

        service
            .save_food(Fixture::identity("u1"), " pho ".to_string())
            .await
            .unwrap();
        assert_eq!(
            service.load_saved_items("u1", 10).await.unwrap()[0].id,
            "pho"
        );

        service
            .unsave_food(Fixture::identity("u1"), "pho".to_string())
            .await
            .unwrap();
        assert!(service.load_saved_items("u1", 10).await.unwrap().is_empty());
    }
}
