pub mod create_notification;
pub mod register_device_token;
