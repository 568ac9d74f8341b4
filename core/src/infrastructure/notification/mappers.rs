use crate::{domain::notification::entities::Notification, entity::user_notifications};

impl From<user_notifications::Model> for Notification {
    fn from(model: user_notifications::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            kind: model.kind,
            title: model.title,
            body: model.body,
            actor_id: model.actor_id,
            actor_name: model.actor_name,
            food_id: model.food_id,
            created_at: model.created_at.to_utc(),
        }
    }
}
