use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    domain::{
        authentication::value_objects::{Identity, IdentityClaims},
        common::{
            AuthConfig, AuthKey, MenuSettings,
            entities::app_errors::CoreError,
            services::{Repositories, Service},
        },
        menu::picker::SeededPicker,
        notification::{
            entities::{MulticastResponse, PushMessage, SendOutcome},
            ports::PushTransport,
        },
    },
    infrastructure::{
        auth::jwt_verifier::JwtTokenVerifier,
        memory::{
            InMemoryCommentRepository, InMemoryDeviceTokenRepository, InMemoryFoodRepository,
            InMemoryMealPlanRepository, InMemoryNotificationRepository,
            InMemorySavedFoodRepository, InMemoryUserDirectory,
        },
        push::logging::LoggingPushTransport,
    },
};

pub(crate) type TestService<PT> = Service<
    InMemoryFoodRepository,
    InMemorySavedFoodRepository,
    InMemoryMealPlanRepository,
    InMemoryCommentRepository,
    InMemoryUserDirectory,
    InMemoryDeviceTokenRepository,
    InMemoryNotificationRepository,
    PT,
    JwtTokenVerifier,
>;

/// In-memory stores whose handles stay readable after a service is built.
#[derive(Default)]
pub(crate) struct Fixture {
    pub foods: InMemoryFoodRepository,
    pub saved: InMemorySavedFoodRepository,
    pub meal_plans: InMemoryMealPlanRepository,
    pub comments: InMemoryCommentRepository,
    pub users: InMemoryUserDirectory,
    pub tokens: InMemoryDeviceTokenRepository,
    pub notifications: InMemoryNotificationRepository,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service(&self) -> TestService<LoggingPushTransport> {
        self.service_with_push(LoggingPushTransport)
    }

    pub fn service_with_push<PT: PushTransport>(&self, push: PT) -> TestService<PT> {
        let verifier = JwtTokenVerifier::new(&AuthConfig {
            key: AuthKey::Secret("fixture-secret".to_string()),
            issuer: None,
            audience: None,
        })
        .unwrap();

        Service::new(
            Repositories {
                food: self.foods.clone(),
                saved_food: self.saved.clone(),
                meal_plan: self.meal_plans.clone(),
                comment: self.comments.clone(),
                user_directory: self.users.clone(),
                device_token: self.tokens.clone(),
                notification: self.notifications.clone(),
            },
            push,
            verifier,
            Arc::new(SeededPicker::new(42)),
            MenuSettings::default(),
        )
    }

    pub fn identity(uid: &str) -> Identity {
        Identity::new(uid, IdentityClaims::default())
    }

    pub fn admin(uid: &str) -> Identity {
        Identity::new(
            uid,
            IdentityClaims {
                admin: Some(true),
                ..Default::default()
            },
        )
    }
}

/// Push transport replaying queued results. With an empty queue every token
/// is reported as delivered.
#[derive(Clone, Default)]
pub(crate) struct ScriptedPushTransport {
    script: Arc<Mutex<VecDeque<Result<MulticastResponse, CoreError>>>>,
    calls: Arc<Mutex<Vec<(Vec<String>, PushMessage)>>>,
}

impl ScriptedPushTransport {
    pub async fn push_response(&self, response: Result<MulticastResponse, CoreError>) {
        self.script.lock().await.push_back(response);
    }

    pub async fn calls(&self) -> Vec<(Vec<String>, PushMessage)> {
        self.calls.lock().await.clone()
    }
}

impl PushTransport for ScriptedPushTransport {
    async fn send_multicast(
        &self,
        tokens: Vec<String>,
        message: PushMessage,
    ) -> Result<MulticastResponse, CoreError> {
        self.calls.lock().await.push((tokens.clone(), message));

        match self.script.lock().await.pop_front() {
            Some(response) => response,
            None => Ok(MulticastResponse {
                responses: tokens.iter().map(|_| SendOutcome::delivered()).collect(),
            }),
        }
    }
}
