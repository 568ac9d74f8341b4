use std::collections::BTreeMap;

use futures::{StreamExt, stream};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        notification::{
            entities::{MulticastResponse, PushMessage, SendOutcome},
            ports::PushTransport,
        },
    },
    infrastructure::push::google_token::GoogleTokenProvider,
};

const FCM_ENDPOINT: &str = "https://fcm.googleapis.com/v1/projects";

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    message: Message<'a>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    token: &'a str,
    notification: NotificationPayload<'a>,
    data: &'a BTreeMap<String, String>,
    android: serde_json::Value,
    apns: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct NotificationPayload<'a> {
    title: &'a str,
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    details: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(rename = "errorCode")]
    error_code: Option<String>,
}

/// Maps an FCM v1 error code onto the `messaging/*` codes used for token cleanup.
pub fn messaging_error_code(fcm_code: &str) -> &'static str {
    match fcm_code {
        "UNREGISTERED" | "NOT_FOUND" => "messaging/registration-token-not-registered",
        "INVALID_ARGUMENT" => "messaging/invalid-argument",
        "SENDER_ID_MISMATCH" => "messaging/mismatched-credential",
        "QUOTA_EXCEEDED" => "messaging/message-rate-exceeded",
        "UNAVAILABLE" => "messaging/server-unavailable",
        "INTERNAL" => "messaging/internal-error",
        "THIRD_PARTY_AUTH_ERROR" => "messaging/third-party-auth-error",
        _ => "messaging/unknown-error",
    }
}

fn outcome_from_error_body(raw: &str) -> SendOutcome {
    match serde_json::from_str::<ErrorEnvelope>(raw) {
        Ok(envelope) => {
            let fcm_code = envelope
                .error
                .details
                .iter()
                .find_map(|detail| detail.error_code.clone())
                .unwrap_or(envelope.error.status);
            SendOutcome::failed(messaging_error_code(&fcm_code), envelope.error.message)
        }
        Err(_) => SendOutcome::failed("messaging/unknown-error", raw),
    }
}

/// Firebase Cloud Messaging over the HTTP v1 API.
///
/// The v1 API takes one token per request, so a multicast is a bounded set
/// of concurrent sends whose outcomes are reported in token order.
pub struct FcmPushTransport {
    project_id: String,
    tokens: GoogleTokenProvider,
    client: Client,
    concurrency: usize,
}

impl FcmPushTransport {
    pub fn new(
        project_id: String,
        tokens: GoogleTokenProvider,
        client: Client,
        concurrency: usize,
    ) -> Self {
        Self {
            project_id,
            tokens,
            client,
            concurrency: concurrency.max(1),
        }
    }

    async fn send_one(
        &self,
        url: &str,
        access_token: &str,
        token: &str,
        message: &PushMessage,
    ) -> SendOutcome {
        let request = SendRequest {
            message: Message {
                token,
                notification: NotificationPayload {
                    title: &message.title,
                    body: &message.body,
                },
                data: &message.data,
                android: json!({ "priority": "high", "notification": { "sound": "default" } }),
                apns: json!({
                    "payload": {
                        "aps": {
                            "alert": { "title": message.title, "body": message.body },
                            "sound": "default"
                        }
                    }
                }),
            },
        };

        let response = match self
            .client
            .post(url)
            .bearer_auth(access_token)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("FCM request failed: {}", e);
                return SendOutcome::failed("messaging/unknown-error", e.to_string());
            }
        };

        if response.status().is_success() {
            return SendOutcome::delivered();
        }

        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        debug!("FCM send rejected: {} - {}", status, error_text);
        outcome_from_error_body(&error_text)
    }
}

impl PushTransport for FcmPushTransport {
    async fn send_multicast(
        &self,
        tokens: Vec<String>,
        message: PushMessage,
    ) -> Result<MulticastResponse, CoreError> {
        let access_token = self.tokens.access_token().await?;
        let url = format!("{}/{}/messages:send", FCM_ENDPOINT, self.project_id);

        let sends: Vec<_> = tokens
            .iter()
            .map(|token| self.send_one(&url, &access_token, token, &message))
            .collect();
        let responses = stream::iter(sends)
            .buffered(self.concurrency)
            .collect::<Vec<_>>()
            .await;

        Ok(MulticastResponse { responses })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_detail_maps_to_cleanup_code() {
        let outcome = outcome_from_error_body(
            r#"{
                "error": {
                    "code": 404,
                    "message": "Requested entity was not found.",
                    "status": "NOT_FOUND",
                    "details": [{
                        "@type": "type.googleapis.com/google.firebase.fcm.v1.FcmError",
                        "errorCode": "UNREGISTERED"
                    }]
                }
            }"#,
        );

        assert!(!outcome.success);
        assert_eq!(
            outcome.error_code.as_deref(),
            Some("messaging/registration-token-not-registered")
        );
        assert!(outcome.is_invalid_token());
    }

    #[test]
    fn test_status_is_used_without_details() {
        let outcome = outcome_from_error_body(
            r#"{ "error": { "code": 400, "message": "bad", "status": "INVALID_ARGUMENT" } }"#,
        );
        assert_eq!(
            outcome.error_code.as_deref(),
            Some("messaging/invalid-argument")
        );
    }

    #[test]
    fn test_transient_errors_keep_the_token() {
        let outcome = outcome_from_error_body(
            r#"{ "error": { "status": "UNAVAILABLE", "details": [{ "errorCode": "UNAVAILABLE" }] } }"#,
        );
        assert!(!outcome.is_invalid_token());

        let garbage = outcome_from_error_body("<html>502</html>");
        assert_eq!(garbage.error_code.as_deref(), Some("messaging/unknown-error"));
        assert!(!garbage.is_invalid_token());
    }
}
