use axum::extract::State;
use mealkit_core::domain::{
    food::entities::FoodItem,
    menu::{ports::MenuService, value_objects::ReloadSlotInput},
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        menu::validators::ReloadSlotValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/slot/reload",
    tag = "menu",
    summary = "Reload one menu slot",
    description = "Picks a random replacement for a slot, preferring saved foods, then catalog items tagged with the slot's meal type, then any catalog item detected as that slot. Ids in excludeIds are never returned.",
    request_body = ReloadSlotValidator,
    responses(
        (status = 200, body = FoodItem),
        (status = 400, body = ApiErrorResponse, description = "slot required"),
        (status = 404, body = ApiErrorResponse, description = "no_candidate")
    )
)]
pub async fn reload_slot(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ReloadSlotValidator>,
) -> Result<Response<FoodItem>, ApiError> {
    let item = state
        .service
        .reload_slot(
            identity,
            ReloadSlotInput {
                slot: payload.slot.unwrap_or_default(),
                exclude_ids: payload.exclude_ids,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(item))
}
