use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    food::entities::FoodItem,
    menu::{entities::SlotAssignment, value_objects::ReloadSlotInput},
};

pub trait MenuService: Send + Sync {
    fn generate_menu(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<SlotAssignment, CoreError>> + Send;

    fn reload_slot(
        &self,
        identity: Identity,
        input: ReloadSlotInput,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;
}
