use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{generate_timestamp, generate_uuid_v7};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub food_id: String,
    pub author_id: String,
    pub author_name: Option<String>,
    pub text: String,
    pub reply_to: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentConfig {
    pub food_id: String,
    pub author_id: String,
    pub author_name: Option<String>,
    pub text: String,
    pub reply_to: Option<String>,
}

impl Comment {
    pub fn new(config: CommentConfig) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7().to_string(),
            food_id: config.food_id,
            author_id: config.author_id,
            author_name: config.author_name,
            text: config.text,
            reply_to: config.reply_to,
            created_at: now,
        }
    }
}
