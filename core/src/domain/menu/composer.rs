use std::collections::HashSet;

use tracing::debug;

use crate::domain::{
    common::{MenuSettings, entities::app_errors::CoreError},
    food::{
        entities::{FoodItem, Slot},
        ports::FoodRepository,
        slot_detector::detect_slot,
    },
    menu::entities::SlotAssignment,
};

/// Slots filled by plain order once detection is exhausted.
const FILL_ORDER: [Slot; 3] = [Slot::Side, Slot::Appetizer, Slot::Dessert];

/// Builds a four-slot menu from the user's saved foods.
///
/// With no saved foods the first three catalog items become main, side and
/// appetizer, and nothing else happens. Otherwise saved foods are placed by
/// detected slot, the first unused one becomes main if needed, leftovers fill
/// side, appetizer and dessert in that order, and the catalog tops up whatever
/// is still empty.
pub async fn compose_menu<C: FoodRepository>(
    saved_items: &[FoodItem],
    catalog: &C,
    settings: &MenuSettings,
) -> Result<SlotAssignment, CoreError> {
    if saved_items.is_empty() {
        let mut top = catalog
            .scan(settings.empty_menu_catalog_limit)
            .await?
            .into_iter();

        return Ok(SlotAssignment {
            main: top.next(),
            side: top.next(),
            appetizer: top.next(),
            dessert: None,
        });
    }

    let mut menu = SlotAssignment::default();
    let mut used = HashSet::new();

    assign_detected(&mut menu, &mut used, saved_items);
    ensure_main(&mut menu, &mut used, saved_items);
    fill_in_order(&mut menu, &mut used, saved_items);

    if menu.first_empty(&FILL_ORDER).is_some() {
        let fallback = catalog.scan(settings.menu_catalog_limit).await?;
        debug!(candidates = fallback.len(), "filling menu from catalog");
        fill_in_order(&mut menu, &mut used, &fallback);
    }

    Ok(menu)
}

fn assign_detected(menu: &mut SlotAssignment, used: &mut HashSet<String>, items: &[FoodItem]) {
    for item in items {
        if used.contains(&item.id) {
            continue;
        }
        if let Some(slot) = detect_slot(item)
            && !menu.is_filled(slot)
        {
            menu.assign(slot, item.clone());
            used.insert(item.id.clone());
        }
        if menu.is_complete() {
            break;
        }
    }
}

fn ensure_main(menu: &mut SlotAssignment, used: &mut HashSet<String>, items: &[FoodItem]) {
    if menu.is_filled(Slot::Main) {
        return;
    }
    if let Some(item) = items.iter().find(|item| !used.contains(&item.id)) {
        menu.assign(Slot::Main, item.clone());
        used.insert(item.id.clone());
        return;
    }
    // Every saved food already holds another slot: the earliest one moves to
    // main and its old slot is left for the catalog fallback.
    if let Some(item) = items.first().and_then(|first| menu.take(&first.id)) {
        menu.assign(Slot::Main, item);
    }
}

fn fill_in_order(menu: &mut SlotAssignment, used: &mut HashSet<String>, items: &[FoodItem]) {
    for item in items {
        let Some(slot) = menu.first_empty(&FILL_ORDER) else {
            break;
        };
        if used.contains(&item.id) {
            continue;
        }
        menu.assign(slot, item.clone());
        used.insert(item.id.clone());
    }
}
