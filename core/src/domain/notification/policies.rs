use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::MealkitPolicy},
    notification::value_objects::CreateNotificationInput,
};

#[cfg_attr(test, mockall::automock)]
pub trait NotificationPolicy: Send + Sync {
    /// Admins may notify anyone with any text. Other callers may only notify
    /// themselves and only with the templated title and body.
    fn can_create_notification(
        &self,
        identity: &Identity,
        recipient_id: &str,
        input: &CreateNotificationInput,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

impl NotificationPolicy for MealkitPolicy {
    async fn can_create_notification(
        &self,
        identity: &Identity,
        recipient_id: &str,
        input: &CreateNotificationInput,
    ) -> Result<bool, CoreError> {
        if identity.is_admin() {
            return Ok(true);
        }

        let custom_text = input.title.is_some() || input.body.is_some();
        Ok(recipient_id == identity.uid && !custom_text)
    }
}
