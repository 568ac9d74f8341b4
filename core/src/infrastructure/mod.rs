pub mod adapters;
pub mod auth;
pub mod comment;
pub mod db;
pub mod food;
pub mod meal_plan;
pub mod memory;
pub mod notification;
pub mod push;
pub mod user;
