pub mod composer;
pub mod entities;
pub mod picker;
pub mod ports;
pub mod reload;
pub mod services;
pub mod value_objects;
