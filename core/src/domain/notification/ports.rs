use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    notification::{
        entities::{MulticastResponse, Notification, PushMessage, PushSummary},
        value_objects::CreateNotificationInput,
    },
};

/// Push registration tokens of a user's devices.
#[cfg_attr(test, mockall::automock)]
pub trait DeviceTokenRepository: Send + Sync {
    fn list_tokens(
        &self,
        user_id: String,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn register(
        &self,
        user_id: String,
        token: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Removes all `tokens` of `user_id` in one write.
    fn delete_tokens(
        &self,
        user_id: String,
        tokens: Vec<String>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait NotificationRepository: Send + Sync {
    fn create(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<Notification, CoreError>> + Send;
}

/// Delivers one message to many devices.
#[cfg_attr(test, mockall::automock)]
pub trait PushTransport: Send + Sync {
    /// Sends `message` to at most [`MULTICAST_LIMIT`] tokens. The response
    /// holds one outcome per token, in order.
    ///
    /// [`MULTICAST_LIMIT`]: crate::domain::notification::entities::MULTICAST_LIMIT
    fn send_multicast(
        &self,
        tokens: Vec<String>,
        message: PushMessage,
    ) -> impl Future<Output = Result<MulticastResponse, CoreError>> + Send;
}

pub trait NotificationService: Send + Sync {
    /// Stores a notification for `user_id` sent by the caller.
    fn create_notification(
        &self,
        identity: Identity,
        user_id: String,
        input: CreateNotificationInput,
    ) -> impl Future<Output = Result<Notification, CoreError>> + Send;

    /// Pushes `notification` to every device of its recipient. Never fails:
    /// problems are logged and counted in the summary.
    fn dispatch_push(&self, notification: Notification)
    -> impl Future<Output = PushSummary> + Send;

    fn register_device_token(
        &self,
        identity: Identity,
        token: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
