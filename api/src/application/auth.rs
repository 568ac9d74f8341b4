use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use mealkit_core::domain::authentication::{ports::AuthService, value_objects::Identity};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::http::server::{
    api_entities::api_error::{ApiError, ApiErrorResponse},
    app_state::AppState,
};

#[derive(Debug, Error, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthError {
    #[error("Unauthorized - missing token")]
    TokenNotFound,
    #[error("Unauthorized - invalid token")]
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ApiErrorResponse {
            error: self.to_string(),
            details: None,
        };

        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::TokenNotFound)?;

    let token = bearer.token().trim();
    if token.is_empty() {
        return Err(AuthError::TokenNotFound);
    }

    Ok(token.to_string())
}

/// Requires a verified bearer token and stores the caller's [`Identity`] in
/// the request extensions.
pub async fn auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let (mut parts, body) = req.into_parts();
    let token = extract_token_from_bearer(&mut parts).await?;

    let identity = state
        .service
        .authorize_request(token)
        .await
        .map_err(|e| {
            debug!("rejected bearer token: {}", e);
            AuthError::InvalidToken
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// The caller resolved by [`auth`].
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| ApiError::Unauthorized(AuthError::TokenNotFound.to_string()))
    }
}
