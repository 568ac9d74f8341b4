use std::collections::HashSet;

use tracing::{info, instrument};

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    food::{
        entities::{FoodItem, Slot},
        ports::{FoodRepository, SavedFoodRepository},
    },
    meal_plan::ports::MealPlanRepository,
    menu::{
        composer::compose_menu, entities::SlotAssignment, ports::MenuService, reload,
        value_objects::ReloadSlotInput,
    },
    notification::ports::{DeviceTokenRepository, NotificationRepository, PushTransport},
    user::ports::UserDirectory,
};

impl<F, SF, MP, CM, UD, DT, NT, PT, TV> MenuService for Service<F, SF, MP, CM, UD, DT, NT, PT, TV>
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
    async fn generate_menu(&self, identity: Identity) -> Result<SlotAssignment, CoreError> {
        let saved = self
            .load_saved_items(&identity.uid, self.settings.menu_saved_limit)
            .await?;

        let menu = compose_menu(&saved, self.food_repository.as_ref(), &self.settings).await?;

        info!(
            saved = saved.len(),
            filled = menu.assigned_ids().len(),
            "menu generated"
        );

        Ok(menu)
    }

    #[instrument(skip(self, identity, input), fields(uid = %identity.uid, slot = %input.slot))]
    async fn reload_slot(
        &self,
        identity: Identity,
        input: ReloadSlotInput,
    ) -> Result<FoodItem, CoreError> {
        let slot_name = input.slot.trim();
        if slot_name.is_empty() {
            return Err(CoreError::BadRequest("slot required".to_string()));
        }
        // Unknown slot names can never match a candidate.
        let Ok(slot) = slot_name.parse::<Slot>() else {
            return Err(CoreError::NoCandidate);
        };

        let exclude_ids: HashSet<String> = input.exclude_ids.into_iter().collect();
        let saved = self
            .load_saved_items(&identity.uid, self.settings.reload_saved_limit)
            .await?;

        reload::reload_slot(
            slot,
            &exclude_ids,
            &saved,
            self.food_repository.as_ref(),
            self.picker.as_ref(),
            &self.settings,
        )
        .await
    }
}
