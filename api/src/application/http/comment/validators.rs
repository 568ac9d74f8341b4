use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::http::server::api_entities::api_error::not_blank;

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct GetCommentsQuery {
    pub food_id: Option<String>,
    /// Page size, 50 by default and at most 200.
    pub limit: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentValidator {
    #[serde(default)]
    #[validate(
        required(message = "foodId and text required"),
        custom(function = "not_blank", message = "foodId and text required")
    )]
    pub food_id: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "foodId and text required"),
        custom(function = "not_blank", message = "foodId and text required"),
        length(max = 2000, message = "text must be at most 2000 characters")
    )]
    pub text: Option<String>,

    #[serde(default)]
    pub reply_to: Option<String>,
}
