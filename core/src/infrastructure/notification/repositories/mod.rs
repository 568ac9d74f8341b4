pub mod device_token_repository;
pub mod notification_repository;
