use std::sync::Arc;

use crate::domain::{
    authentication::ports::TokenVerifier,
    comment::ports::CommentRepository,
    common::{MenuSettings, policies::MealkitPolicy},
    food::ports::{FoodRepository, SavedFoodRepository},
    meal_plan::ports::MealPlanRepository,
    menu::picker::CandidatePicker,
    notification::ports::{DeviceTokenRepository, NotificationRepository, PushTransport},
    user::ports::UserDirectory,
};

/// Store adapters a [`Service`] is built from.
pub struct Repositories<F, SF, MP, CM, UD, DT, NT> {
    pub food: F,
    pub saved_food: SF,
    pub meal_plan: MP,
    pub comment: CM,
    pub user_directory: UD,
    pub device_token: DT,
    pub notification: NT,
}

pub struct Service<F, SF, MP, CM, UD, DT, NT, PT, TV>
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
    pub(crate) food_repository: Arc<F>,
    pub(crate) saved_food_repository: Arc<SF>,
    pub(crate) meal_plan_repository: Arc<MP>,
    pub(crate) comment_repository: Arc<CM>,
    pub(crate) user_directory: Arc<UD>,
    pub(crate) device_token_repository: Arc<DT>,
    pub(crate) notification_repository: Arc<NT>,
    pub(crate) push_transport: Arc<PT>,
    pub(crate) token_verifier: Arc<TV>,
    pub(crate) picker: Arc<dyn CandidatePicker>,
    pub(crate) policy: MealkitPolicy,
    pub(crate) settings: MenuSettings,
}

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
    pub fn new(
        repositories: Repositories<F, SF, MP, CM, UD, DT, NT>,
        push_transport: PT,
        token_verifier: TV,
        picker: Arc<dyn CandidatePicker>,
        settings: MenuSettings,
    ) -> Self {
        Self {
            food_repository: Arc::new(repositories.food),
            saved_food_repository: Arc::new(repositories.saved_food),
            meal_plan_repository: Arc::new(repositories.meal_plan),
            comment_repository: Arc::new(repositories.comment),
            user_directory: Arc::new(repositories.user_directory),
            device_token_repository: Arc::new(repositories.device_token),
            notification_repository: Arc::new(repositories.notification),
            push_transport: Arc::new(push_transport),
            token_verifier: Arc::new(token_verifier),
            picker,
            policy: MealkitPolicy::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &MenuSettings {
        &self.settings
    }
}

impl<F, SF, MP, CM, UD, DT, NT, PT, TV> Clone for Service<F, SF, MP, CM, UD, DT, NT, PT, TV>
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
    fn clone(&self) -> Self {
        Self {
            food_repository: Arc::clone(&self.food_repository),
            saved_food_repository: Arc::clone(&self.saved_food_repository),
            meal_plan_repository: Arc::clone(&self.meal_plan_repository),
            comment_repository: Arc::clone(&self.comment_repository),
            user_directory: Arc::clone(&self.user_directory),
            device_token_repository: Arc::clone(&self.device_token_repository),
            notification_repository: Arc::clone(&self.notification_repository),
            push_transport: Arc::clone(&self.push_transport),
            token_verifier: Arc::clone(&self.token_verifier),
            picker: Arc::clone(&self.picker),
            policy: self.policy,
            settings: self.settings.clone(),
        }
    }
}
