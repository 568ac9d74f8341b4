use tracing::{info, instrument};

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    food::ports::{FoodRepository, SavedFoodRepository},
    meal_plan::{
        entities::MealPlan,
        ports::{MealPlanRepository, MealPlanService},
        value_objects::SaveMealPlanInput,
    },
    notification::ports::{DeviceTokenRepository, NotificationRepository, PushTransport},
    user::ports::UserDirectory,
};

impl<F, SF, MP, CM, UD, DT, NT, PT, TV> MealPlanService
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
    #[instrument(skip(self, identity, input), fields(uid = %identity.uid))]
    async fn save_meal_plan(
        &self,
        identity: Identity,
        input: SaveMealPlanInput,
    ) -> Result<MealPlan, CoreError> {
        let date = input.resolve_date()?;
        let plan = MealPlan::from_api(date, input.resolve_meals());

        let saved = self.meal_plan_repository.upsert(identity.uid, plan).await?;
        info!(date = %saved.date_key(), meals = saved.meals.len(), "meal plan saved");

        Ok(saved)
    }
}
