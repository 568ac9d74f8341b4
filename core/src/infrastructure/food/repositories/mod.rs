pub mod food_repository;
pub mod saved_food_repository;
