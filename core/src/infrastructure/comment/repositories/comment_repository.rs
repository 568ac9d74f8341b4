use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::error;

use crate::{
    domain::{
        comment::{entities::Comment, ports::CommentRepository},
        common::entities::app_errors::CoreError,
    },
    entity::comments::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresCommentRepository {
    pub db: DatabaseConnection,
}

impl PostgresCommentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CommentRepository for PostgresCommentRepository {
    async fn list_by_food(&self, food_id: String, limit: u64) -> Result<Vec<Comment>, CoreError> {
        let models = Entity::find()
            .filter(Column::FoodId.eq(food_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list comments: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(models.into_iter().map(Comment::from).collect())
    }

    async fn create(&self, comment: Comment) -> Result<Comment, CoreError> {
        let active_model = ActiveModel {
            id: Set(comment.id.clone()),
            food_id: Set(comment.food_id.clone()),
            author_id: Set(comment.author_id.clone()),
            author_name: Set(comment.author_name.clone()),
            text: Set(comment.text.clone()),
            reply_to: Set(comment.reply_to.clone()),
            created_at: Set(comment.created_at.fixed_offset()),
        };

        Entity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create comment: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(comment)
    }

    async fn get_by_id(&self, comment_id: String) -> Result<Option<Comment>, CoreError> {
        let model = Entity::find_by_id(comment_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get comment: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(model.map(Comment::from))
    }

    async fn delete(&self, comment_id: String) -> Result<(), CoreError> {
        Entity::delete_by_id(comment_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete comment: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(())
    }
}
