use tracing::warn;

use crate::domain::{
    authentication::{
        ports::{AuthService, TokenVerifier},
        value_objects::Identity,
    },
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    food::ports::{FoodRepository, SavedFoodRepository},
    meal_plan::ports::MealPlanRepository,
    notification::ports::{DeviceTokenRepository, NotificationRepository, PushTransport},
    user::ports::UserDirectory,
};

impl<F, SF, MP, CM, UD, DT, NT, PT, TV> AuthService for Service<F, SF, MP, CM, UD, DT, NT, PT, TV>
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
    async fn authorize_request(&self, token: String) -> Result<Identity, CoreError> {
        if token.trim().is_empty() {
            return Err(CoreError::Unauthorized);
        }

        self.token_verifier.verify_token(token).await.map_err(|e| {
            warn!("Token verify failed: {}", e);
            CoreError::InvalidToken
        })
    }
}
