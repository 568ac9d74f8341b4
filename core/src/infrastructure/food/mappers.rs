use crate::{domain::food::entities::FoodItem, entity::foods};

impl From<foods::Model> for FoodItem {
    fn from(model: foods::Model) -> Self {
        FoodItem::from_value(model.id, model.data)
    }
}
