use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::not_blank;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterDeviceTokenValidator {
    #[serde(default)]
    #[validate(
        required(message = "token required"),
        custom(function = "not_blank", message = "token required"),
        length(max = 4096, message = "token must be at most 4096 characters")
    )]
    pub token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationValidator {
    /// Free-form kind, `general` when omitted.
    #[serde(default, rename = "type")]
    #[validate(length(max = 64, message = "type must be at most 64 characters"))]
    pub kind: Option<String>,

    /// Custom title. Admin callers only.
    #[serde(default)]
    #[validate(length(max = 200, message = "title must be at most 200 characters"))]
    pub title: Option<String>,

    /// Custom body. Admin callers only.
    #[serde(default)]
    #[validate(length(max = 1000, message = "body must be at most 1000 characters"))]
    pub body: Option<String>,

    #[serde(default)]
    pub food_id: Option<String>,
}
