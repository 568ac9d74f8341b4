use axum::extract::State;
use mealkit_core::domain::meal_plan::{ports::MealPlanService, value_objects::SaveMealPlanInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        meal_plan::validators::SaveMealPlanValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveMealPlanResponse {
    pub ok: bool,
    pub date: String,
}

#[utoipa::path(
    post,
    path = "/mealPlan",
    tag = "meal-plan",
    summary = "Save meal plan",
    description = "Stores the caller's meals for one day, replacing any plan already saved for that date.",
    request_body = SaveMealPlanValidator,
    responses(
        (status = 200, body = SaveMealPlanResponse),
        (status = 400, body = ApiErrorResponse, description = "Malformed date")
    )
)]
pub async fn save_meal_plan(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<SaveMealPlanValidator>,
) -> Result<Response<SaveMealPlanResponse>, ApiError> {
    let plan = state
        .service
        .save_meal_plan(
            identity,
            SaveMealPlanInput {
                date: payload.date,
                meals: payload.meals,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SaveMealPlanResponse {
        ok: true,
        date: plan.date_key(),
    }))
}
