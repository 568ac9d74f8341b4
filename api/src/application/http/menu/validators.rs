use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::not_blank;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReloadSlotValidator {
    /// One of `main`, `side`, `appetizer`, `dessert`.
    #[serde(default)]
    #[validate(
        required(message = "slot required"),
        custom(function = "not_blank", message = "slot required")
    )]
    pub slot: Option<String>,

    #[serde(default, deserialize_with = "lenient_string_list")]
    pub exclude_ids: Vec<String>,
}

/// Accepts any JSON for a list of ids: non-arrays become empty and
/// non-string elements are dropped.
fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(values)) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(id) => Some(id),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exclude_ids_are_lenient() {
        let payload: ReloadSlotValidator =
            serde_json::from_value(json!({ "slot": "side", "excludeIds": ["a", 3, null, "b"] }))
                .unwrap();
        assert_eq!(payload.exclude_ids, vec!["a", "b"]);

        let payload: ReloadSlotValidator =
            serde_json::from_value(json!({ "slot": "side", "excludeIds": "a" })).unwrap();
        assert!(payload.exclude_ids.is_empty());

        let payload: ReloadSlotValidator = serde_json::from_value(json!({})).unwrap();
        assert_eq!(payload.slot, None);
        assert!(payload.exclude_ids.is_empty());
    }

    #[test]
    fn test_slot_is_required() {
        let missing: ReloadSlotValidator = serde_json::from_value(json!({})).unwrap();
        assert!(missing.validate().is_err());

        let blank: ReloadSlotValidator = serde_json::from_value(json!({ "slot": "  " })).unwrap();
        assert!(blank.validate().is_err());

        let side: ReloadSlotValidator = serde_json::from_value(json!({ "slot": "side" })).unwrap();
        assert!(side.validate().is_ok());
    }
}
