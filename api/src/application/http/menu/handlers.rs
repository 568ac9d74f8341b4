pub mod get_menu;
pub mod reload_slot;
