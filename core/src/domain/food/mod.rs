pub mod entities;
pub mod ports;
pub mod services;
pub mod slot_detector;
