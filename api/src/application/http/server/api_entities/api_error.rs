use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mealkit_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    fn status_and_body(self) -> (StatusCode, ApiErrorResponse) {
        match self {
            ApiError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                ApiErrorResponse {
                    error: message,
                    details: None,
                },
            ),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ApiErrorResponse {
                    error: message,
                    details: None,
                },
            ),
            ApiError::Forbidden(code) => (
                StatusCode::FORBIDDEN,
                ApiErrorResponse {
                    error: code,
                    details: None,
                },
            ),
            ApiError::NotFound(code) => (
                StatusCode::NOT_FOUND,
                ApiErrorResponse {
                    error: code,
                    details: None,
                },
            ),
            ApiError::InternalServerError(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorResponse {
                    error: "server_error".to_string(),
                    details: Some(details),
                },
            ),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Unauthorized => {
                ApiError::Unauthorized("Unauthorized - missing token".to_string())
            }
            CoreError::InvalidToken => {
                ApiError::Unauthorized("Unauthorized - invalid token".to_string())
            }
            CoreError::BadRequest(message) => ApiError::BadRequest(message),
            CoreError::NotFound => ApiError::NotFound("not_found".to_string()),
            CoreError::NoCandidate => ApiError::NotFound("no_candidate".to_string()),
            CoreError::Forbidden(_) => ApiError::Forbidden("forbidden".to_string()),
            CoreError::ExternalServiceError(_)
            | CoreError::Database(_)
            | CoreError::InternalServerError => {
                error!("request failed: {}", error);
                ApiError::InternalServerError(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler.
#[derive(Debug, Clone)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(validation_message)?;

        Ok(ValidateJson(value))
    }
}

/// Rejects strings that are empty once trimmed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

/// First message attached to a failed field rule, else the full report.
fn validation_message(errors: ValidationErrors) -> ApiError {
    let message = errors
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| errors.to_string());

    ApiError::BadRequest(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_wire_codes() {
        assert_eq!(
            ApiError::from(CoreError::NoCandidate),
            ApiError::NotFound("no_candidate".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::NotFound),
            ApiError::NotFound("not_found".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::Forbidden("not the author".to_string())),
            ApiError::Forbidden("forbidden".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::BadRequest("slot required".to_string())),
            ApiError::BadRequest("slot required".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::InvalidToken),
            ApiError::Unauthorized("Unauthorized - invalid token".to_string())
        );
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("pho").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_server_errors_carry_details() {
        let (status, body) =
            ApiError::from(CoreError::Database("connection reset".to_string())).status_and_body();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "server_error");
        assert_eq!(
            body.details.as_deref(),
            Some("Database error: connection reset")
        );
    }
}
