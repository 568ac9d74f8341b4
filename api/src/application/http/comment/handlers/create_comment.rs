use axum::extract::State;
use mealkit_core::domain::comment::{
    entities::Comment, ports::CommentService, value_objects::CreateCommentInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        comment::validators::CreateCommentValidator,
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
pub struct CreateCommentResponse {
    pub ok: bool,
    pub comment: Comment,
}

#[utoipa::path(
    post,
    path = "",
    tag = "comment",
    summary = "Create comment",
    description = "Posts a comment on a food as the caller. The author name comes from the caller's profile.",
    request_body = CreateCommentValidator,
    responses(
        (status = 201, body = CreateCommentResponse),
        (status = 400, body = ApiErrorResponse, description = "foodId and text required")
    )
)]
pub async fn create_comment(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateCommentValidator>,
) -> Result<Response<CreateCommentResponse>, ApiError> {
    let comment = state
        .service
        .create_comment(
            identity,
            CreateCommentInput {
                food_id: payload.food_id,
                text: payload.text,
                reply_to: payload.reply_to,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateCommentResponse { ok: true, comment }))
}
