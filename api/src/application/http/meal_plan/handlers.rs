pub mod save_meal_plan;
