use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    comment::entities::Comment,
    common::{entities::app_errors::CoreError, policies::MealkitPolicy},
};

#[cfg_attr(test, mockall::automock)]
pub trait CommentPolicy: Send + Sync {
    /// Authors may delete their own comments, admins may delete any.
    fn can_delete_comment(
        &self,
        identity: &Identity,
        comment: &Comment,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

impl CommentPolicy for MealkitPolicy {
    async fn can_delete_comment(
        &self,
        identity: &Identity,
        comment: &Comment,
    ) -> Result<bool, CoreError> {
        Ok(comment.author_id == identity.uid || identity.is_admin())
    }
}
