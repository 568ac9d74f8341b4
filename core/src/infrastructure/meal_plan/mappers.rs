use serde_json::Value;

use crate::{domain::meal_plan::entities::MealPlan, entity::meal_plans};

impl From<meal_plans::Model> for MealPlan {
    fn from(model: meal_plans::Model) -> Self {
        let meals = match model.meals {
            Value::Array(meals) => meals,
            _ => Vec::new(),
        };

        Self {
            date: model.date,
            meals,
            source: model.source,
            updated_at: model.updated_at.to_utc(),
        }
    }
}
