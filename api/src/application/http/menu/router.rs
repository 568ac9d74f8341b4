use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_menu::{__path_get_menu, get_menu},
    reload_slot::{__path_reload_slot, reload_slot},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_menu, reload_slot))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/menu", state.args.server.root_path),
            get(get_menu),
        )
        .route(
            &format!("{}/slot/reload", state.args.server.root_path),
            post(reload_slot),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
