use axum::extract::State;
use mealkit_core::domain::menu::{entities::SlotAssignment, ports::MenuService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/menu",
    tag = "menu",
    summary = "Generate menu",
    description = "Builds a main, side, appetizer and dessert menu from the caller's most recently saved foods, topped up from the catalog.",
    responses(
        (status = 200, body = SlotAssignment),
        (status = 401, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_menu(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<SlotAssignment>, ApiError> {
    let menu = state
        .service
        .generate_menu(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(menu))
}
