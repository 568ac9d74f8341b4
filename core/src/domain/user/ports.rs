use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, user::entities::UserProfile};

#[cfg_attr(test, mockall::automock)]
pub trait UserDirectory: Send + Sync {
    fn get_profile(
        &self,
        user_id: String,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;
}
