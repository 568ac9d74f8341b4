pub mod comment;
pub mod health;
pub mod meal_plan;
pub mod menu;
pub mod notification;
pub mod saved_food;
pub mod server;
