use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveMealPlanValidator {
    /// `YYYY-MM-DD` or an ISO datetime, defaults to today (UTC).
    #[serde(default)]
    #[validate(length(max = 64, message = "date must be at most 64 characters"))]
    pub date: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<Object>>)]
    pub meals: Option<Value>,
}
