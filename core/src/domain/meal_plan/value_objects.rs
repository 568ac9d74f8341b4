use chrono::{NaiveDate, Utc};
use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Default)]
pub struct SaveMealPlanInput {
    /// `YYYY-MM-DD` or an ISO datetime starting with one; today (UTC) when
    /// absent or blank.
    pub date: Option<String>,
    /// Raw `meals` value of the request. Anything but an array becomes empty.
    pub meals: Option<Value>,
}

impl SaveMealPlanInput {
    pub fn resolve_date(&self) -> Result<NaiveDate, CoreError> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(Utc::now().date_naive()),
            Some(raw) => parse_day(raw).ok_or_else(|| {
                CoreError::BadRequest(format!("invalid date '{raw}', expected YYYY-MM-DD"))
            }),
        }
    }

    pub fn resolve_meals(self) -> Vec<Value> {
        match self.meals {
            Some(Value::Array(meals)) => meals,
            _ => Vec::new(),
        }
    }
}

/// Calendar day of `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM...` or `YYYY-MM-DD HH:MM...`.
fn parse_day(raw: &str) -> Option<NaiveDate> {
    let day = raw.get(..10)?;
    let rest = &raw[10..];
    if !(rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ')) {
        return None;
    }

    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_date_defaults_to_today() {
        let input = SaveMealPlanInput::default();
        assert_eq!(input.resolve_date().unwrap(), Utc::now().date_naive());

        let blank = SaveMealPlanInput {
            date: Some("  ".to_string()),
            meals: None,
        };
        assert_eq!(blank.resolve_date().unwrap(), Utc::now().date_naive());
    }

    #[test]
    fn test_date_must_be_iso() {
        let input = SaveMealPlanInput {
            date: Some("17/10/2026".to_string()),
            meals: None,
        };
        assert!(matches!(input.resolve_date(), Err(CoreError::BadRequest(_))));

        let input = SaveMealPlanInput {
            date: Some("2026-10-17".to_string()),
            meals: None,
        };
        assert_eq!(
            input.resolve_date().unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
        );
    }

    #[test]
    fn test_iso_datetime_keeps_its_day() {
        let expected = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        for raw in [
            "2026-03-01T23:30:00+07:00",
            "2026-03-01T08:00:00.000Z",
            "2026-03-01 08:00",
        ] {
            let input = SaveMealPlanInput {
                date: Some(raw.to_string()),
                meals: None,
            };
            assert_eq!(input.resolve_date().unwrap(), expected, "{raw}");
        }

        for raw in ["2026-03-01x", "2026-3-1", "ngày mai"] {
            let input = SaveMealPlanInput {
                date: Some(raw.to_string()),
                meals: None,
            };
            assert!(input.resolve_date().is_err(), "{raw}");
        }
    }

    #[test]
    fn test_non_array_meals_are_dropped() {
        let input = SaveMealPlanInput {
            date: None,
            meals: Some(json!({ "breakfast": "pho" })),
        };
        assert!(input.resolve_meals().is_empty());

        let input = SaveMealPlanInput {
            date: None,
            meals: Some(json!([{ "foodId": "f1" }, "free text"])),
        };
        assert_eq!(input.resolve_meals().len(), 2);
    }
}
