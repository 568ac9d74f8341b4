use crate::{domain::comment::entities::Comment, entity::comments};

impl From<comments::Model> for Comment {
    fn from(model: comments::Model) -> Self {
        Self {
            id: model.id,
            food_id: model.food_id,
            author_id: model.author_id,
            author_name: model.author_name,
            text: model.text,
            reply_to: model.reply_to,
            created_at: model.created_at.to_utc(),
        }
    }
}
