use crate::{domain::user::entities::UserProfile, entity::user_profiles};

impl From<user_profiles::Model> for UserProfile {
    fn from(model: user_profiles::Model) -> Self {
        Self {
            id: model.id,
            display_name: model.display_name,
            email: model.email,
        }
    }
}
