use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::common::{batch::Identified, entities::app_errors::CoreError};

/// A catalog entry. Attributes are free-form and owned by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub id: String,
    #[schema(value_type = Object)]
    pub data: Map<String, Value>,
}

impl FoodItem {
    pub fn new(id: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Builds an item from a JSON value, keeping only object attributes.
    pub fn from_value(id: impl Into<String>, data: Value) -> Self {
        match data {
            Value::Object(map) => Self::new(id, map),
            _ => Self::new(id, Map::new()),
        }
    }

    /// First attribute among `keys` that is present and not null.
    pub fn first_attribute(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.data.get(*key))
            .find(|value| !value.is_null())
    }
}

impl Identified for FoodItem {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Main,
    Side,
    Appetizer,
    Dessert,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Main, Slot::Side, Slot::Appetizer, Slot::Dessert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Main => "main",
            Slot::Side => "side",
            Slot::Appetizer => "appetizer",
            Slot::Dessert => "dessert",
        }
    }

    /// Exact `mealType` values the catalog uses for this slot, most specific first.
    pub fn meal_type_synonyms(&self) -> &'static [&'static str] {
        match self {
            Slot::Main => &["Bữa chính", "main", "chính"],
            Slot::Side => &["Món phụ", "side", "phụ"],
            Slot::Appetizer => &["Khai vị", "appetizer", "starter"],
            Slot::Dessert => &["Tráng miệng", "dessert"],
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Slot::Main),
            "side" => Ok(Slot::Side),
            "appetizer" => Ok(Slot::Appetizer),
            "dessert" => Ok(Slot::Dessert),
            other => Err(CoreError::BadRequest(format!("unknown slot '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_attribute_skips_nulls() {
        let item = FoodItem::from_value(
            "f1",
            json!({ "mealType": null, "meal_type": "Món phụ", "mealTypes": ["main"] }),
        );
        assert_eq!(
            item.first_attribute(&["mealType", "meal_type", "mealTypes"]),
            Some(&json!("Món phụ"))
        );
    }

    #[test]
    fn test_non_object_data_is_empty() {
        let item = FoodItem::from_value("f1", json!("not an object"));
        assert!(item.data.is_empty());
    }

    #[test]
    fn test_slot_wire_format() {
        assert_eq!(serde_json::to_value(Slot::Appetizer).unwrap(), json!("appetizer"));
        assert_eq!("dessert".parse::<Slot>().unwrap(), Slot::Dessert);
        assert!("Dessert".parse::<Slot>().is_err());
    }
}
