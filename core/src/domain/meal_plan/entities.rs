use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::common::generate_timestamp;

/// Marks plans written through the HTTP API.
pub const API_SOURCE: &str = "api";

/// A user's plan for one calendar day. Stored per (user, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub date: NaiveDate,
    #[schema(value_type = Vec<Object>)]
    pub meals: Vec<Value>,
    pub source: String,
    pub updated_at: DateTime<Utc>,
}

impl MealPlan {
    pub fn from_api(date: NaiveDate, meals: Vec<Value>) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            date,
            meals,
            source: API_SOURCE.to_string(),
            updated_at: now,
        }
    }

    /// Calendar key in `YYYY-MM-DD` form.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
