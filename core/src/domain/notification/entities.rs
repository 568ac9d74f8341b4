use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{generate_timestamp, generate_uuid_v7};

pub const DEFAULT_NOTIFICATION_TYPE: &str = "general";

/// Largest token list a single multicast may carry.
pub const MULTICAST_LIMIT: usize = 500;

/// Error codes that mean the device token will never be deliverable again.
const INVALID_TOKEN_MARKERS: [&str; 3] = [
    "registration-token-not-registered",
    "invalid-argument",
    "messaging/invalid-registration-token",
];

/// An activity entry in a user's inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub actor_id: Option<String>,
    pub actor_name: Option<String>,
    pub food_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationConfig {
    pub user_id: String,
    pub kind: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub actor_id: Option<String>,
    pub actor_name: Option<String>,
    pub food_id: Option<String>,
}

impl Notification {
    pub fn new(config: NotificationConfig) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7().to_string(),
            user_id: config.user_id,
            kind: config
                .kind
                .unwrap_or_else(|| DEFAULT_NOTIFICATION_TYPE.to_string()),
            title: config.title,
            body: config.body,
            actor_id: config.actor_id,
            actor_name: config.actor_name,
            food_id: config.food_id,
            created_at: now,
        }
    }
}

/// What is delivered to every device of the recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushMessage {
    pub title: String,
    pub body: String,
    pub data: BTreeMap<String, String>,
}

impl PushMessage {
    /// Builds the message, filling in the default title and body for the
    /// notification type when the notification does not carry its own.
    pub fn from_notification(notification: &Notification) -> Self {
        let actor = notification.actor_name.as_deref().unwrap_or("Ai đó");

        let title = notification.title.clone().unwrap_or_else(|| {
            match notification.kind.as_str() {
                "like" => "Bài viết được thích",
                "follow" => "Có người theo dõi bạn",
                _ => "Thông báo",
            }
            .to_string()
        });
        let body = notification
            .body
            .clone()
            .unwrap_or_else(|| match notification.kind.as_str() {
                "like" => format!("{actor} đã thích bài viết của bạn"),
                "follow" => format!("{actor} đã theo dõi bạn"),
                _ => "Bạn có hoạt động mới".to_string(),
            });

        let mut data = BTreeMap::new();
        data.insert("type".to_string(), notification.kind.clone());
        data.insert(
            "actorId".to_string(),
            notification.actor_id.clone().unwrap_or_default(),
        );
        data.insert(
            "foodId".to_string(),
            notification.food_id.clone().unwrap_or_default(),
        );

        Self { title, body, data }
    }
}

/// Delivery result for one token of a multicast, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendOutcome {
    pub success: bool,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

impl SendOutcome {
    pub fn delivered() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    pub fn failed(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_code: Some(code.into()),
            error_message: Some(message.into()),
        }
    }

    pub fn is_invalid_token(&self) -> bool {
        !self.success && self.error_code.as_deref().is_some_and(is_invalid_token_code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MulticastResponse {
    pub responses: Vec<SendOutcome>,
}

impl MulticastResponse {
    pub fn success_count(&self) -> usize {
        self.responses.iter().filter(|r| r.success).count()
    }

    pub fn failure_count(&self) -> usize {
        self.responses.len() - self.success_count()
    }
}

/// Totals of one push dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PushSummary {
    pub tokens: usize,
    pub success: usize,
    pub failure: usize,
    pub removed_tokens: usize,
    pub failed_chunks: usize,
}

pub fn is_invalid_token_code(code: &str) -> bool {
    INVALID_TOKEN_MARKERS
        .iter()
        .any(|marker| code.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(kind: Option<&str>) -> Notification {
        Notification::new(NotificationConfig {
            user_id: "u1".to_string(),
            kind: kind.map(str::to_string),
            ..Default::default()
        })
    }

    #[test]
    fn test_default_texts_per_type() {
        let mut like = notification(Some("like"));
        like.actor_name = Some("Minh".to_string());
        let message = PushMessage::from_notification(&like);
        assert_eq!(message.title, "Bài viết được thích");
        assert_eq!(message.body, "Minh đã thích bài viết của bạn");

        let message = PushMessage::from_notification(&notification(Some("follow")));
        assert_eq!(message.title, "Có người theo dõi bạn");
        assert_eq!(message.body, "Ai đó đã theo dõi bạn");

        let message = PushMessage::from_notification(&notification(None));
        assert_eq!(message.title, "Thông báo");
        assert_eq!(message.body, "Bạn có hoạt động mới");
        assert_eq!(message.data["type"], "general");
    }

    #[test]
    fn test_explicit_texts_and_data_payload() {
        let mut item = notification(Some("like"));
        item.title = Some("Custom".to_string());
        item.body = Some("Hello".to_string());
        item.food_id = Some("pho".to_string());

        let message = PushMessage::from_notification(&item);
        assert_eq!(message.title, "Custom");
        assert_eq!(message.body, "Hello");
        assert_eq!(message.data["actorId"], "");
        assert_eq!(message.data["foodId"], "pho");
    }

    #[test]
    fn test_invalid_token_codes() {
        assert!(is_invalid_token_code(
            "messaging/registration-token-not-registered"
        ));
        assert!(is_invalid_token_code("messaging/invalid-argument"));
        assert!(is_invalid_token_code("messaging/invalid-registration-token"));
        assert!(!is_invalid_token_code("messaging/internal-error"));
        assert!(!SendOutcome::delivered().is_invalid_token());
    }
}
