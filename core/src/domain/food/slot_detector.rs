use serde_json::Value;

use crate::domain::food::entities::{FoodItem, Slot};

const MEAL_TYPE_KEYS: [&str; 3] = ["mealType", "meal_type", "mealTypes"];
const CATEGORY_KEYS: [&str; 2] = ["categoryName", "category"];

type KeywordGroups = [(Slot, &'static [&'static str]); 4];

/// Check order for `mealType` values: main first.
const MEAL_TYPE_GROUPS: KeywordGroups = [
    (Slot::Main, &["main", "chính"]),
    (Slot::Side, &["side", "phụ"]),
    (Slot::Appetizer, &["appetizer", "khai", "starter"]),
    (Slot::Dessert, &["dessert", "tráng"]),
];

/// Check order for category names: dessert first. Existing catalogs depend on
/// this order, so it differs from [`MEAL_TYPE_GROUPS`] on purpose.
const CATEGORY_GROUPS: KeywordGroups = [
    (Slot::Dessert, &["tráng", "dessert"]),
    (Slot::Appetizer, &["khai", "appetizer", "starter"]),
    (Slot::Side, &["phụ", "side", "snack"]),
    (Slot::Main, &["chính", "main"]),
];

/// Guesses which menu slot a food belongs to.
///
/// `mealType` wins when it yields a match; list values are scanned in order
/// and the first element that matches decides. Otherwise the category name is
/// tested. Malformed attributes count as "no signal".
pub fn detect_slot(item: &FoodItem) -> Option<Slot> {
    detect_from_meal_type(item).or_else(|| detect_from_category(item))
}

fn detect_from_meal_type(item: &FoodItem) -> Option<Slot> {
    match item.first_attribute(&MEAL_TYPE_KEYS)? {
        Value::Array(values) => values
            .iter()
            .filter_map(as_text)
            .find_map(|text| match_groups(&text, &MEAL_TYPE_GROUPS)),
        Value::String(text) => match_groups(text, &MEAL_TYPE_GROUPS),
        _ => None,
    }
}

fn detect_from_category(item: &FoodItem) -> Option<Slot> {
    let category = item.first_attribute(&CATEGORY_KEYS).and_then(as_text)?;
    match_groups(&category, &CATEGORY_GROUPS)
}

fn match_groups(text: &str, groups: &KeywordGroups) -> Option<Slot> {
    let text = text.to_lowercase();
    groups
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(slot, _)| *slot)
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(values) => Some(
            values
                .iter()
                .filter_map(as_text)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Null | Value::Object(_) => None,
    }
}
