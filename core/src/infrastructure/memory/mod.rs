//! Process-local adapters for development runs and tests.
//!
//! Every repository is cheap to clone and clones share state.

mod comment;
mod device_token;
mod food;
mod meal_plan;
mod notification;
mod saved_food;
mod user;

pub use comment::InMemoryCommentRepository;
pub use device_token::InMemoryDeviceTokenRepository;
pub use food::InMemoryFoodRepository;
pub use meal_plan::InMemoryMealPlanRepository;
pub use notification::InMemoryNotificationRepository;
pub use saved_food::InMemorySavedFoodRepository;
pub use user::InMemoryUserDirectory;
