use std::sync::Arc;

use reqwest::Client;
use tracing::info;

use crate::{
    domain::{
        common::{
            MealkitConfig, MenuSettings, PushConfig, StorageConfig, entities::app_errors::CoreError,
            services::{Repositories, Service},
        },
        menu::picker::{CandidatePicker, ThreadRngPicker},
    },
    infrastructure::{
        adapters::{
            CommentRepositoryAdapter, DeviceTokenRepositoryAdapter, FoodRepositoryAdapter,
            MealPlanRepositoryAdapter, NotificationRepositoryAdapter, PushTransportAdapter,
            SavedFoodRepositoryAdapter, UserDirectoryAdapter,
        },
        auth::jwt_verifier::JwtTokenVerifier,
        comment::repositories::comment_repository::PostgresCommentRepository,
        db::postgres::Postgres,
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
        push::{
            fcm::FcmPushTransport,
            google_token::{GoogleTokenProvider, ServiceAccountKey},
            logging::LoggingPushTransport,
        },
        user::repositories::user_directory::PostgresUserDirectory,
    },
};

pub type MealkitService = Service<
    FoodRepositoryAdapter,
    SavedFoodRepositoryAdapter,
    MealPlanRepositoryAdapter,
    CommentRepositoryAdapter,
    UserDirectoryAdapter,
    DeviceTokenRepositoryAdapter,
    NotificationRepositoryAdapter,
    PushTransportAdapter,
    JwtTokenVerifier,
>;

pub type StoreAdapters = Repositories<
    FoodRepositoryAdapter,
    SavedFoodRepositoryAdapter,
    MealPlanRepositoryAdapter,
    CommentRepositoryAdapter,
    UserDirectoryAdapter,
    DeviceTokenRepositoryAdapter,
    NotificationRepositoryAdapter,
>;

/// Builds the service for `config`: connects the store, loads push
/// credentials and prepares token verification.
pub async fn create_service(config: MealkitConfig) -> Result<MealkitService, anyhow::Error> {
    let repositories = match &config.storage {
        StorageConfig::Postgres(database) => {
            let postgres = Postgres::new(database).await?;
            info!(host = %database.host, name = %database.name, "using postgres storage");
            postgres_repositories(&postgres)
        }
        StorageConfig::Memory { food_seed_path } => {
            let foods = match food_seed_path {
                Some(path) => {
                    let raw = tokio::fs::read_to_string(path).await?;
                    InMemoryFoodRepository::from_json(&raw)?
                }
                None => InMemoryFoodRepository::default(),
            };
            info!(foods = foods.count().await, "using in-memory storage");
            memory_repositories(foods)
        }
    };

    let push_transport = create_push_transport(&config.push).await?;
    let token_verifier = JwtTokenVerifier::new(&config.auth)?;

    Ok(Service::new(
        repositories,
        push_transport,
        token_verifier,
        Arc::new(ThreadRngPicker),
        config.menu,
    ))
}

/// Service over the given stores with log-only push delivery.
pub fn create_service_with(
    repositories: StoreAdapters,
    token_verifier: JwtTokenVerifier,
    picker: Arc<dyn CandidatePicker>,
    settings: MenuSettings,
) -> MealkitService {
    Service::new(
        repositories,
        PushTransportAdapter::Log(LoggingPushTransport),
        token_verifier,
        picker,
        settings,
    )
}

pub fn postgres_repositories(postgres: &Postgres) -> StoreAdapters {
    let db = postgres.get_db();

    Repositories {
        food: FoodRepositoryAdapter::Postgres(PostgresFoodRepository::new(db.clone())),
        saved_food: SavedFoodRepositoryAdapter::Postgres(PostgresSavedFoodRepository::new(
            db.clone(),
        )),
        meal_plan: MealPlanRepositoryAdapter::Postgres(PostgresMealPlanRepository::new(
            db.clone(),
        )),
        comment: CommentRepositoryAdapter::Postgres(PostgresCommentRepository::new(db.clone())),
        user_directory: UserDirectoryAdapter::Postgres(PostgresUserDirectory::new(db.clone())),
        device_token: DeviceTokenRepositoryAdapter::Postgres(PostgresDeviceTokenRepository::new(
            db.clone(),
        )),
        notification: NotificationRepositoryAdapter::Postgres(
            PostgresNotificationRepository::new(db),
        ),
    }
}

pub fn memory_repositories(foods: InMemoryFoodRepository) -> StoreAdapters {
    Repositories {
        food: FoodRepositoryAdapter::Memory(foods),
        saved_food: SavedFoodRepositoryAdapter::Memory(InMemorySavedFoodRepository::default()),
        meal_plan: MealPlanRepositoryAdapter::Memory(InMemoryMealPlanRepository::default()),
        comment: CommentRepositoryAdapter::Memory(InMemoryCommentRepository::default()),
        user_directory: UserDirectoryAdapter::Memory(InMemoryUserDirectory::default()),
        device_token: DeviceTokenRepositoryAdapter::Memory(
            InMemoryDeviceTokenRepository::default(),
        ),
        notification: NotificationRepositoryAdapter::Memory(
            InMemoryNotificationRepository::default(),
        ),
    }
}

async fn create_push_transport(config: &PushConfig) -> Result<PushTransportAdapter, CoreError> {
    match config {
        PushConfig::Log => Ok(PushTransportAdapter::Log(LoggingPushTransport)),
        PushConfig::Fcm(fcm) => {
            let key = ServiceAccountKey::from_file(&fcm.credentials_path).await?;
            let project_id = fcm
                .project_id
                .clone()
                .or_else(|| key.project_id.clone())
                .ok_or_else(|| {
                    CoreError::ExternalServiceError(
                        "FCM project id missing from config and service account key".to_string(),
                    )
                })?;

            let client = Client::new();
            let tokens = GoogleTokenProvider::new(key, client.clone())?;
            info!(project_id = %project_id, "using FCM push transport");

            Ok(PushTransportAdapter::Fcm(Box::new(FcmPushTransport::new(
                project_id,
                tokens,
                client,
                fcm.concurrency,
            ))))
        }
    }
}
