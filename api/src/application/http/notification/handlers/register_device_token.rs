use axum::extract::State;
use mealkit_core::domain::notification::ports::NotificationService;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        notification::validators::RegisterDeviceTokenValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::{OkResponse, Response},
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/fcmTokens",
    tag = "notification",
    summary = "Register device token",
    description = "Registers a push token for one of the caller's devices. Registering a known token is a no-op.",
    request_body = RegisterDeviceTokenValidator,
    responses(
        (status = 200, body = OkResponse),
        (status = 400, body = ApiErrorResponse, description = "token required")
    )
)]
pub async fn register_device_token(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RegisterDeviceTokenValidator>,
) -> Result<Response<OkResponse>, ApiError> {
    state
        .service
        .register_device_token(identity, payload.token.unwrap_or_default())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(OkResponse::ok()))
}
