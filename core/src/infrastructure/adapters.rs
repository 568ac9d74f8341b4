//! Backend selection for the store and push ports.
//!
//! Each enum forwards to the adapter chosen at start-up so a single
//! concrete service type covers every configuration.

use crate::{
    domain::{
        comment::{entities::Comment, ports::CommentRepository},
        common::entities::app_errors::CoreError,
        food::{
            entities::FoodItem,
            ports::{FoodRepository, SavedFoodRepository},
        },
        meal_plan::{entities::MealPlan, ports::MealPlanRepository},
        notification::{
            entities::{MulticastResponse, Notification, PushMessage},
            ports::{DeviceTokenRepository, NotificationRepository, PushTransport},
        },
        user::{entities::UserProfile, ports::UserDirectory},
    },
    infrastructure::{
        comment::repositories::comment_repository::PostgresCommentRepository,
        food::repositories::{
            food_repository::PostgresFoodRepository,
            saved_food_repository::PostgresSavedFoodRepository,
        },
        meal_plan::repositories::meal_plan_repository::PostgresMealPlanRepository,
        memory::{
            InMemoryCommentRepository, InMemoryDeviceTokenRepository, InMemoryFoodRepository,
            InMemoryMealPlanRepository, InMemoryNotificationRepository,
            InMemorySavedFoodRepository, InMemoryUserDirectory,
        },
        notification::repositories::{
            device_token_repository::PostgresDeviceTokenRepository,
            notification_repository::PostgresNotificationRepository,
        },
        push::{fcm::FcmPushTransport, logging::LoggingPushTransport},
        user::repositories::user_directory::PostgresUserDirectory,
    },
};

#[derive(Debug, Clone)]
pub enum FoodRepositoryAdapter {
    Postgres(PostgresFoodRepository),
    Memory(InMemoryFoodRepository),
}

impl FoodRepository for FoodRepositoryAdapter {
    async fn get_by_ids(&self, ids: Vec<String>) -> Result<Vec<FoodItem>, CoreError> {
        match self {
            Self::Postgres(repository) => repository.get_by_ids(ids).await,
            Self::Memory(repository) => repository.get_by_ids(ids).await,
        }
    }

    async fn scan(&self, limit: u64) -> Result<Vec<FoodItem>, CoreError> {
        match self {
            Self::Postgres(repository) => repository.scan(limit).await,
            Self::Memory(repository) => repository.scan(limit).await,
        }
    }

    async fn find_by_meal_type(
        &self,
        meal_type: String,
        limit: u64,
    ) -> Result<Vec<FoodItem>, CoreError> {
        match self {
            Self::Postgres(repository) => repository.find_by_meal_type(meal_type, limit).await,
            Self::Memory(repository) => repository.find_by_meal_type(meal_type, limit).await,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SavedFoodRepositoryAdapter {
    Postgres(PostgresSavedFoodRepository),
    Memory(InMemorySavedFoodRepository),
}

impl SavedFoodRepository for SavedFoodRepositoryAdapter {
    async fn recent_saved_ids(
        &self,
        user_id: String,
        limit: u64,
    ) -> Result<Vec<String>, CoreError> {
        match self {
            Self::Postgres(repository) => repository.recent_saved_ids(user_id, limit).await,
            Self::Memory(repository) => repository.recent_saved_ids(user_id, limit).await,
        }
    }

    async fn save(&self, user_id: String, food_id: String) -> Result<(), CoreError> {
        match self {
            Self::Postgres(repository) => repository.save(user_id, food_id).await,
            Self::Memory(repository) => repository.save(user_id, food_id).await,
        }
    }

    async fn unsave(&self, user_id: String, food_id: String) -> Result<(), CoreError> {
        match self {
            Self::Postgres(repository) => repository.unsave(user_id, food_id).await,
            Self::Memory(repository) => repository.unsave(user_id, food_id).await,
        }
    }
}

#[derive(Debug, Clone)]
pub enum MealPlanRepositoryAdapter {
    Postgres(PostgresMealPlanRepository),
    Memory(InMemoryMealPlanRepository),
}

impl MealPlanRepository for MealPlanRepositoryAdapter {
    async fn upsert(&self, user_id: String, plan: MealPlan) -> Result<MealPlan, CoreError> {
        match self {
            Self::Postgres(repository) => repository.upsert(user_id, plan).await,
            Self::Memory(repository) => repository.upsert(user_id, plan).await,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CommentRepositoryAdapter {
    Postgres(PostgresCommentRepository),
    Memory(InMemoryCommentRepository),
}

impl CommentRepository for CommentRepositoryAdapter {
    async fn list_by_food(&self, food_id: String, limit: u64) -> Result<Vec<Comment>, CoreError> {
        match self {
            Self::Postgres(repository) => repository.list_by_food(food_id, limit).await,
            Self::Memory(repository) => repository.list_by_food(food_id, limit).await,
        }
    }

    async fn create(&self, comment: Comment) -> Result<Comment, CoreError> {
        match self {
            Self::Postgres(repository) => repository.create(comment).await,
            Self::Memory(repository) => repository.create(comment).await,
        }
    }

    async fn get_by_id(&self, comment_id: String) -> Result<Option<Comment>, CoreError> {
        match self {
            Self::Postgres(repository) => repository.get_by_id(comment_id).await,
            Self::Memory(repository) => repository.get_by_id(comment_id).await,
        }
    }

    async fn delete(&self, comment_id: String) -> Result<(), CoreError> {
        match self {
            Self::Postgres(repository) => repository.delete(comment_id).await,
            Self::Memory(repository) => repository.delete(comment_id).await,
        }
    }
}

#[derive(Debug, Clone)]
pub enum UserDirectoryAdapter {
    Postgres(PostgresUserDirectory),
    Memory(InMemoryUserDirectory),
}

impl UserDirectory for UserDirectoryAdapter {
    async fn get_profile(&self, user_id: String) -> Result<Option<UserProfile>, CoreError> {
        match self {
            Self::Postgres(directory) => directory.get_profile(user_id).await,
            Self::Memory(directory) => directory.get_profile(user_id).await,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DeviceTokenRepositoryAdapter {
    Postgres(PostgresDeviceTokenRepository),
    Memory(InMemoryDeviceTokenRepository),
}

impl DeviceTokenRepository for DeviceTokenRepositoryAdapter {
    async fn list_tokens(&self, user_id: String) -> Result<Vec<String>, CoreError> {
        match self {
            Self::Postgres(repository) => repository.list_tokens(user_id).await,
            Self::Memory(repository) => repository.list_tokens(user_id).await,
        }
    }

    async fn register(&self, user_id: String, token: String) -> Result<(), CoreError> {
        match self {
            Self::Postgres(repository) => repository.register(user_id, token).await,
            Self::Memory(repository) => repository.register(user_id, token).await,
        }
    }

    async fn delete_tokens(&self, user_id: String, tokens: Vec<String>) -> Result<(), CoreError> {
        match self {
            Self::Postgres(repository) => repository.delete_tokens(user_id, tokens).await,
            Self::Memory(repository) => repository.delete_tokens(user_id, tokens).await,
        }
    }
}

#[derive(Debug, Clone)]
pub enum NotificationRepositoryAdapter {
    Postgres(PostgresNotificationRepository),
    Memory(InMemoryNotificationRepository),
}

impl NotificationRepository for NotificationRepositoryAdapter {
    async fn create(&self, notification: Notification) -> Result<Notification, CoreError> {
        match self {
            Self::Postgres(repository) => repository.create(notification).await,
            Self::Memory(repository) => repository.create(notification).await,
        }
    }
}

pub enum PushTransportAdapter {
    Fcm(Box<FcmPushTransport>),
    Log(LoggingPushTransport),
}

impl PushTransport for PushTransportAdapter {
    async fn send_multicast(
        &self,
        tokens: Vec<String>,
        message: PushMessage,
    ) -> Result<MulticastResponse, CoreError> {
        match self {
            Self::Fcm(transport) => transport.send_multicast(tokens, message).await,
            Self::Log(transport) => transport.send_multicast(tokens, message).await,
        }
    }
}
