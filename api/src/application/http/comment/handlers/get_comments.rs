use axum::extract::{Query, State};
use mealkit_core::domain::comment::{
    entities::Comment, ports::CommentService, value_objects::GetCommentsFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        comment::validators::GetCommentsQuery,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCommentsResponse {
    pub ok: bool,
    pub comments: Vec<Comment>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "comment",
    summary = "List comments",
    description = "Comments on one food, newest first.",
    params(GetCommentsQuery),
    responses(
        (status = 200, body = GetCommentsResponse),
        (status = 400, body = ApiErrorResponse, description = "foodId required")
    )
)]
pub async fn get_comments(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(query): Query<GetCommentsQuery>,
) -> Result<Response<GetCommentsResponse>, ApiError> {
    let comments = state
        .service
        .get_comments(
            identity,
            GetCommentsFilter {
                food_id: query.food_id,
                limit: query.limit,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCommentsResponse { ok: true, comments }))
}
