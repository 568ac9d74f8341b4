use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    create_notification::{__path_create_notification, create_notification},
    register_device_token::{__path_register_device_token, register_device_token},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(register_device_token, create_notification))]
pub struct NotificationApiDoc;

pub fn notification_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/fcmTokens", state.args.server.root_path),
            post(register_device_token),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/notifications",
                state.args.server.root_path
            ),
            post(create_notification),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
