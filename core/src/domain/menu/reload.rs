use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::{
    common::{MenuSettings, entities::app_errors::CoreError},
    food::{
        entities::{FoodItem, Slot},
        ports::FoodRepository,
        slot_detector::detect_slot,
    },
    menu::picker::{CandidatePicker, pick_one},
};

/// Picks a replacement food for a single menu slot.
///
/// Candidates are searched in three passes and the first pass with any
/// candidate wins: the user's saved foods detected as `slot`, then catalog
/// items tagged with one of the slot's `mealType` synonyms (first synonym with
/// results), then a wide catalog scan filtered by slot detection. Ids in
/// `exclude_ids` are never returned.
pub async fn reload_slot<C: FoodRepository>(
    slot: Slot,
    exclude_ids: &HashSet<String>,
    saved_items: &[FoodItem],
    catalog: &C,
    picker: &dyn CandidatePicker,
    settings: &MenuSettings,
) -> Result<FoodItem, CoreError> {
    let eligible = |item: &FoodItem| !exclude_ids.contains(&item.id);

    let saved: Vec<FoodItem> = saved_items
        .iter()
        .filter(|item| eligible(*item) && detect_slot(*item) == Some(slot))
        .cloned()
        .collect();
    if let Some(item) = pick_one(picker, saved) {
        debug!(%slot, food_id = %item.id, "reloaded from saved foods");
        return Ok(item);
    }

    for synonym in slot.meal_type_synonyms() {
        let tagged = match catalog
            .find_by_meal_type(synonym.to_string(), settings.reload_synonym_limit)
            .await
        {
            Ok(items) => items,
            Err(e) => {
                warn!(%slot, synonym, "mealType lookup failed: {}", e);
                continue;
            }
        };

        let tagged: Vec<FoodItem> = tagged.into_iter().filter(|item| eligible(item)).collect();
        if let Some(item) = pick_one(picker, tagged) {
            debug!(%slot, synonym, food_id = %item.id, "reloaded from mealType synonym");
            return Ok(item);
        }
    }

    let scanned: Vec<FoodItem> = catalog
        .scan(settings.reload_scan_limit)
        .await?
        .into_iter()
        .filter(|item| eligible(item) && detect_slot(item) == Some(slot))
        .collect();
    if let Some(item) = pick_one(picker, scanned) {
        debug!(%slot, food_id = %item.id, "reloaded from catalog scan");
        return Ok(item);
    }

    Err(CoreError::NoCandidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    use crate::{
        domain::menu::picker::{SeededPicker, ThreadRngPicker},
        infrastructure::memory::InMemoryFoodRepository,
    };

    fn food(id: &str, data: Value) -> FoodItem {
        FoodItem::from_value(id, data)
    }

    fn excluded(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    async fn catalog(items: Vec<FoodItem>) -> InMemoryFoodRepository {
        let repository = InMemoryFoodRepository::default();
        for item in items {
            repository.insert(item).await;
        }
        repository
    }

    #[tokio::test]
    async fn test_saved_foods_win() {
        let saved = vec![
            food("s1", json!({ "mealType": ["dessert"] })),
            food("s2", json!({ "category": "Tráng miệng" })),
            food("s3", json!({ "mealType": ["main"] })),
        ];
        let catalog = catalog(vec![food("c1", json!({ "mealType": ["Tráng miệng"] }))]).await;

        for _ in 0..20 {
            let item = reload_slot(
                Slot::Dessert,
                &excluded(&[]),
                &saved,
                &catalog,
                &ThreadRngPicker,
                &MenuSettings::default(),
            )
            .await
            .unwrap();
            assert!(["s1", "s2"].contains(&item.id.as_str()));
        }
    }

    #[tokio::test]
    async fn test_excluded_saved_foods_fall_through_to_synonyms() {
        let saved = vec![food("s1", json!({ "mealType": ["dessert"] }))];
        let catalog = catalog(vec![
            food("c1", json!({ "mealType": ["dessert"] })),
            food("c2", json!({ "mealType": ["Tráng miệng", "snack"] })),
        ])
        .await;

        let item = reload_slot(
            Slot::Dessert,
            &excluded(&["s1"]),
            &saved,
            &catalog,
            &SeededPicker::new(3),
            &MenuSettings::default(),
        )
        .await
        .unwrap();

        // "Tráng miệng" is the first dessert synonym, so c1 is not considered.
        assert_eq!(item.id, "c2");
    }

    #[tokio::test]
    async fn test_synonym_match_is_exact() {
        let catalog = catalog(vec![
            food("substring", json!({ "mealType": ["Bữa chính ngon"] })),
            food("scalar", json!({ "mealType": "main" })),
            food("exact", json!({ "mealType": ["chính"] })),
        ])
        .await;

        let item = reload_slot(
            Slot::Main,
            &excluded(&[]),
            &[],
            &catalog,
            &SeededPicker::new(9),
            &MenuSettings::default(),
        )
        .await
        .unwrap();

        assert_eq!(item.id, "exact");
    }

    #[tokio::test]
    async fn test_scan_uses_slot_detection() {
        let catalog = catalog(vec![
            food("c1", json!({ "categoryName": "Món khai vị" })),
            food("c2", json!({ "categoryName": "Món chính" })),
            food("c3", json!({ "mealType": "Starter plate" })),
        ])
        .await;

        for seed in 0..10 {
            let item = reload_slot(
                Slot::Appetizer,
                &excluded(&[]),
                &[],
                &catalog,
                &SeededPicker::new(seed),
                &MenuSettings::default(),
            )
            .await
            .unwrap();
            assert!(["c1", "c3"].contains(&item.id.as_str()));
        }
    }

    #[tokio::test]
    async fn test_everything_excluded_is_no_candidate() {
        let saved = vec![food("s1", json!({ "mealType": ["side"] }))];
        let catalog = catalog(vec![
            food("s1", json!({ "mealType": ["side"] })),
            food("c1", json!({ "mealType": ["Món phụ"] })),
            food("c2", json!({ "category": "Snack" })),
            food("other", json!({ "mealType": ["main"] })),
        ])
        .await;

        let result = reload_slot(
            Slot::Side,
            &excluded(&["s1", "c1", "c2"]),
            &saved,
            &catalog,
            &ThreadRngPicker,
            &MenuSettings::default(),
        )
        .await;

        assert_eq!(result, Err(CoreError::NoCandidate));
    }

    #[tokio::test]
    async fn test_scan_limit_bounds_last_pass() {
        let catalog = catalog(vec![
            food("c1", json!({})),
            food("c2", json!({ "category": "dessert" })),
        ])
        .await;
        let settings = MenuSettings {
            reload_scan_limit: 1,
            ..MenuSettings::default()
        };

        let result = reload_slot(
            Slot::Dessert,
            &excluded(&[]),
            &[],
            &catalog,
            &ThreadRngPicker,
            &settings,
        )
        .await;

        assert_eq!(result, Err(CoreError::NoCandidate));
    }
}
