pub mod authentication;
pub mod comment;
pub mod common;
pub mod food;
pub mod meal_plan;
pub mod menu;
pub mod notification;
pub mod user;
