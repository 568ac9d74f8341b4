use axum::extract::{Path, State};
use mealkit_core::domain::comment::ports::CommentService;

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
    delete,
    path = "/{comment_id}",
    tag = "comment",
    summary = "Delete comment",
    description = "Deletes a comment. Only its author or an admin may do so.",
    params(
        ("comment_id" = String, Path, description = "Comment ID"),
    ),
    responses(
        (status = 200, body = OkResponse),
        (status = 403, body = ApiErrorResponse, description = "forbidden"),
        (status = 404, body = ApiErrorResponse, description = "not_found")
    )
)]
pub async fn delete_comment(
    Path(comment_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<OkResponse>, ApiError> {
    state
        .service
        .delete_comment(identity, comment_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(OkResponse::ok()))
}
