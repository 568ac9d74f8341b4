use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::save_meal_plan::{__path_save_meal_plan, save_meal_plan};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(save_meal_plan))]
pub struct MealPlanApiDoc;

pub fn meal_plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/mealPlan", state.args.server.root_path),
            post(save_meal_plan),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
