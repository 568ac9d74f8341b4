use axum::extract::{Path, State};
use mealkit_core::domain::notification::{
    entities::Notification, ports::NotificationService, value_objects::CreateNotificationInput,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        notification::validators::CreateNotificationValidator,
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
pub struct CreateNotificationResponse {
    pub ok: bool,
    pub notification: Notification,
}

#[utoipa::path(
    post,
    path = "/users/{user_id}/notifications",
    tag = "notification",
    summary = "Create notification",
    description = "Stores a notification for a user and pushes it to every registered device of that user in the background. Non-admin callers may only notify themselves with the templated text. The actor is always the caller.",
    params(
        ("user_id" = String, Path, description = "Recipient user ID"),
    ),
    request_body = CreateNotificationValidator,
    responses(
        (status = 201, body = CreateNotificationResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 403, body = ApiErrorResponse, description = "forbidden")
    )
)]
pub async fn create_notification(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateNotificationValidator>,
) -> Result<Response<CreateNotificationResponse>, ApiError> {
    let notification = state
        .service
        .create_notification(
            identity,
            user_id,
            CreateNotificationInput {
                kind: payload.kind,
                title: payload.title,
                body: payload.body,
                food_id: payload.food_id,
            },
        )
        .await
        .map_err(ApiError::from)?;

    let service = state.service.clone();
    let pending = notification.clone();
    tokio::spawn(async move {
        let summary = service.dispatch_push(pending).await;
        debug!(?summary, "push dispatch finished");
    });

    Ok(Response::Created(CreateNotificationResponse {
        ok: true,
        notification,
    }))
}
