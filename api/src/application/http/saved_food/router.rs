use axum::{Router, middleware, routing::put};
use utoipa::OpenApi;

use super::handlers::{
    save_food::{__path_save_food, save_food},
    unsave_food::{__path_unsave_food, unsave_food},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(save_food, unsave_food))]
pub struct SavedFoodApiDoc;

pub fn saved_food_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/saves/{{food_id}}", state.args.server.root_path),
            put(save_food).delete(unsave_food),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
