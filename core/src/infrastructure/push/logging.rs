use tracing::info;

use crate::domain::{
    common::entities::app_errors::CoreError,
    notification::{
        entities::{MulticastResponse, PushMessage, SendOutcome},
        ports::PushTransport,
    },
};

/// Development transport: logs the message and reports every token as delivered.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPushTransport;

impl PushTransport for LoggingPushTransport {
    async fn send_multicast(
        &self,
        tokens: Vec<String>,
        message: PushMessage,
    ) -> Result<MulticastResponse, CoreError> {
        info!(
            tokens = tokens.len(),
            title = %message.title,
            body = %message.body,
            "push message (not delivered)"
        );

        Ok(MulticastResponse {
            responses: tokens.iter().map(|_| SendOutcome::delivered()).collect(),
        })
    }
}
