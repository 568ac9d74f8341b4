pub mod save_food;
pub mod unsave_food;
