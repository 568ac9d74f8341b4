pub use super::comments::Entity as Comments;
pub use super::foods::Entity as Foods;
pub use super::meal_plans::Entity as MealPlans;
pub use super::user_fcm_tokens::Entity as UserFcmTokens;
pub use super::user_notifications::Entity as UserNotifications;
pub use super::user_profiles::Entity as UserProfiles;
pub use super::user_saved_foods::Entity as UserSavedFoods;
