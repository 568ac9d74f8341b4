use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food::entities::{FoodItem, Slot};

/// One generated menu. A food id appears in at most one slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SlotAssignment {
    pub main: Option<FoodItem>,
    pub side: Option<FoodItem>,
    pub appetizer: Option<FoodItem>,
    pub dessert: Option<FoodItem>,
}

impl SlotAssignment {
    pub fn get(&self, slot: Slot) -> Option<&FoodItem> {
        match slot {
            Slot::Main => self.main.as_ref(),
            Slot::Side => self.side.as_ref(),
            Slot::Appetizer => self.appetizer.as_ref(),
            Slot::Dessert => self.dessert.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<FoodItem> {
        match slot {
            Slot::Main => &mut self.main,
            Slot::Side => &mut self.side,
            Slot::Appetizer => &mut self.appetizer,
            Slot::Dessert => &mut self.dessert,
        }
    }

    pub fn is_filled(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }

    pub fn assign(&mut self, slot: Slot, item: FoodItem) {
        *self.slot_mut(slot) = Some(item);
    }

    /// Empties the slot holding `id` and returns its food.
    pub fn take(&mut self, id: &str) -> Option<FoodItem> {
        let slot = Slot::ALL
            .into_iter()
            .find(|slot| self.get(*slot).is_some_and(|item| item.id == id))?;
        self.slot_mut(slot).take()
    }

    pub fn is_complete(&self) -> bool {
        Slot::ALL.iter().all(|slot| self.is_filled(*slot))
    }

    /// First slot of `order` that is still empty.
    pub fn first_empty(&self, order: &[Slot]) -> Option<Slot> {
        order.iter().copied().find(|slot| !self.is_filled(*slot))
    }

    pub fn assigned_ids(&self) -> Vec<&str> {
        Slot::ALL
            .iter()
            .filter_map(|slot| self.get(*slot))
            .map(|item| item.id.as_str())
            .collect()
    }
}
