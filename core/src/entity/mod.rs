//! sea-orm entities for the Postgres schema in `core/migrations`.

pub mod prelude;

pub mod comments;
pub mod foods;
pub mod meal_plans;
pub mod user_fcm_tokens;
pub mod user_notifications;
pub mod user_profiles;
pub mod user_saved_foods;
