use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    comment::{
        entities::Comment,
        value_objects::{CreateCommentInput, GetCommentsFilter},
    },
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait CommentRepository: Send + Sync {
    /// Comments on `food_id`, newest first.
    fn list_by_food(
        &self,
        food_id: String,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Comment>, CoreError>> + Send;

    fn create(&self, comment: Comment) -> impl Future<Output = Result<Comment, CoreError>> + Send;

    fn get_by_id(
        &self,
        comment_id: String,
    ) -> impl Future<Output = Result<Option<Comment>, CoreError>> + Send;

    fn delete(&self, comment_id: String) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait CommentService: Send + Sync {
    fn get_comments(
        &self,
        identity: Identity,
        filter: GetCommentsFilter,
    ) -> impl Future<Output = Result<Vec<Comment>, CoreError>> + Send;

    fn create_comment(
        &self,
        identity: Identity,
        input: CreateCommentInput,
    ) -> impl Future<Output = Result<Comment, CoreError>> + Send;

    fn delete_comment(
        &self,
        identity: Identity,
        comment_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
