use axum::extract::{Path, State};
use mealkit_core::domain::food::ports::SavedFoodService;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{
            api_error::ApiError,
            response::{OkResponse, Response},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/{food_id}",
    tag = "saved-food",
    summary = "Unsave food",
    params(
        ("food_id" = String, Path, description = "Food ID"),
    ),
    responses(
        (status = 200, body = OkResponse)
    )
)]
pub async fn unsave_food(
    Path(food_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<OkResponse>, ApiError> {
    state
        .service
        .unsave_food(identity, food_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(OkResponse::ok()))
}
