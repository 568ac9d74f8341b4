use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{
    comment::{entities::Comment, ports::CommentRepository},
    common::entities::app_errors::CoreError,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryCommentRepository {
    comments: Arc<RwLock<Vec<Comment>>>,
}

impl InMemoryCommentRepository {
    pub async fn count(&self) -> usize {
        self.comments.read().await.len()
    }
}

impl CommentRepository for InMemoryCommentRepository {
    async fn list_by_food(&self, food_id: String, limit: u64) -> Result<Vec<Comment>, CoreError> {
        let comments = self.comments.read().await;

        // Later inserts win ties on `created_at`.
        let mut matching: Vec<Comment> = comments
            .iter()
            .rev()
            .filter(|comment| comment.food_id == food_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching.truncate(limit as usize);

        Ok(matching)
    }

    async fn create(&self, comment: Comment) -> Result<Comment, CoreError> {
        self.comments.write().await.push(comment.clone());
        Ok(comment)
    }

    async fn get_by_id(&self, comment_id: String) -> Result<Option<Comment>, CoreError> {
        let comments = self.comments.read().await;
        Ok(comments
            .iter()
            .find(|comment| comment.id == comment_id)
            .cloned())
    }

    async fn delete(&self, comment_id: String) -> Result<(), CoreError> {
        self.comments
            .write()
            .await
            .retain(|comment| comment.id != comment_id);
        Ok(())
    }
}
