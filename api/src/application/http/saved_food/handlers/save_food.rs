use axum::extract::{Path, State};
use mealkit_core::domain::food::ports::SavedFoodService;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::{OkResponse, Response},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/{food_id}",
    tag = "saved-food",
    summary = "Save food",
    description = "Bookmarks a catalog food for the caller. Saving again marks it as the most recent.",
    params(
        ("food_id" = String, Path, description = "Food ID"),
    ),
    responses(
        (status = 200, body = OkResponse),
        (status = 404, body = ApiErrorResponse, description = "not_found")
    )
)]
pub async fn save_food(
    Path(food_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<OkResponse>, ApiError> {
    state
        .service
        .save_food(identity, food_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(OkResponse::ok()))
}
