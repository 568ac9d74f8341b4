use tracing::{error, info, instrument, warn};

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    comment::ports::CommentRepository,
    common::{
        entities::app_errors::CoreError, non_blank, policies::ensure_policy, services::Service,
    },
    food::ports::{FoodRepository, SavedFoodRepository},
    meal_plan::ports::MealPlanRepository,
    notification::{
        entities::{MULTICAST_LIMIT, Notification, NotificationConfig, PushMessage, PushSummary},
        policies::NotificationPolicy,
        ports::{DeviceTokenRepository, NotificationRepository, NotificationService, PushTransport},
        value_objects::CreateNotificationInput,
    },
    user::ports::UserDirectory,
};

impl<F, SF, MP, CM, UD, DT, NT, PT, TV> NotificationService
    for Service<F, SF, MP, CM, UD, DT, NT, PT, TV>
where
    F: FoodRepository,
    SF: SavedFoodRepository,
    MP: MealPlanRepository,
    CM: CommentRepository,
    UD: UserDirectory,
    DT: DeviceTokenRepository,
    NT: NotificationRepository,
    PT: PushTransport,
    TV: TokenVerifier,
{
    #[instrument(skip(self, identity, input), fields(uid = %identity.uid))]
    async fn create_notification(
        &self,
        identity: Identity,
        user_id: String,
        input: CreateNotificationInput,
    ) -> Result<Notification, CoreError> {
        let user_id = non_blank(Some(user_id))
            .ok_or_else(|| CoreError::BadRequest("userId required".to_string()))?;
        let input = CreateNotificationInput {
            kind: non_blank(input.kind),
            title: non_blank(input.title),
            body: non_blank(input.body),
            food_id: non_blank(input.food_id),
        };

        ensure_policy(
            self.policy
                .can_create_notification(&identity, &user_id, &input)
                .await,
            "only admins can notify other users or send custom text",
        )?;

        let actor_name = non_blank(identity.claims.name).or(non_blank(identity.claims.email));
        let notification = Notification::new(NotificationConfig {
            user_id,
            kind: input.kind,
            title: input.title,
            body: input.body,
            actor_id: Some(identity.uid),
            actor_name,
            food_id: input.food_id,
        });

        let created = self.notification_repository.create(notification).await?;
        info!(notification_id = %created.id, kind = %created.kind, "notification created");

        Ok(created)
    }

    #[instrument(
        skip(self, notification),
        fields(user_id = %notification.user_id, notification_id = %notification.id)
    )]
    async fn dispatch_push(&self, notification: Notification) -> PushSummary {
        let mut summary = PushSummary::default();
        let user_id = notification.user_id.clone();

        let tokens: Vec<String> = match self
            .device_token_repository
            .list_tokens(user_id.clone())
            .await
        {
            Ok(tokens) => tokens.into_iter().filter(|token| !token.is_empty()).collect(),
            Err(e) => {
                error!("Failed to load push tokens: {}", e);
                return summary;
            }
        };
        if tokens.is_empty() {
            info!("No push tokens for user {}", user_id);
            return summary;
        }
        summary.tokens = tokens.len();

        let message = PushMessage::from_notification(&notification);

        for chunk in tokens.chunks(MULTICAST_LIMIT) {
            let response = match self
                .push_transport
                .send_multicast(chunk.to_vec(), message.clone())
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    error!("Push chunk send failed: {}", e);
                    summary.failed_chunks += 1;
                    continue;
                }
            };

            summary.success += response.success_count();
            summary.failure += response.failure_count();

            let mut invalid = Vec::new();
            for (index, (token, outcome)) in chunk.iter().zip(&response.responses).enumerate() {
                if outcome.success {
                    continue;
                }
                if outcome.is_invalid_token() {
                    info!("Deleting invalid token {} for user {}", token, user_id);
                    invalid.push(token.clone());
                } else {
                    warn!(
                        index,
                        code = outcome.error_code.as_deref().unwrap_or_default(),
                        "Push delivery failed: {}",
                        outcome.error_message.as_deref().unwrap_or_default()
                    );
                }
            }

            if invalid.is_empty() {
                continue;
            }
            let removed = invalid.len();
            match self
                .device_token_repository
                .delete_tokens(user_id.clone(), invalid)
                .await
            {
                Ok(()) => summary.removed_tokens += removed,
                Err(e) => error!("Failed to delete invalid push tokens: {}", e),
            }
        }

        info!(
            tokens = summary.tokens,
            success = summary.success,
            failure = summary.failure,
            removed = summary.removed_tokens,
            "push dispatched"
        );

        summary
    }

    #[instrument(skip(self, identity, token), fields(uid = %identity.uid))]
    async fn register_device_token(
        &self,
        identity: Identity,
        token: String,
    ) -> Result<(), CoreError> {
        let token = non_blank(Some(token))
            .ok_or_else(|| CoreError::BadRequest("token required".to_string()))?;

        self.device_token_repository.register(identity.uid, token).await
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{
        authentication::value_objects::{Identity, IdentityClaims},
        common::{
            entities::app_errors::CoreError,
            testing::{Fixture, ScriptedPushTransport},
        },
        notification::{
            entities::{MulticastResponse, SendOutcome},
            ports::NotificationService,
            value_objects::CreateNotificationInput,
        },
    };

    fn like() -> CreateNotificationInput {
        CreateNotificationInput {
            kind: Some("like".to_string()),
            food_id: Some("pho".to_string()),
            ..Default::default()
        }
    }

    /// Server-side caller allowed to notify other users.
    fn trigger(name: &str) -> Identity {
        Identity::new(
            "actor",
            IdentityClaims {
                admin: Some(true),
                name: Some(name.to_string()),
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_create_notification_records_actor() {
        let fixture = Fixture::new();
        let created = fixture
            .service()
            .create_notification(trigger("Minh"), "owner".to_string(), like())
            .await
            .unwrap();

        assert_eq!(created.user_id, "owner");
        assert_eq!(created.kind, "like");
        assert_eq!(created.actor_id.as_deref(), Some("actor"));
        assert_eq!(fixture.notifications.for_user("owner").await.len(), 1);
    }

    #[tokio::test]
    async fn test_user_cannot_notify_someone_else() {
        let fixture = Fixture::new();
        let attacker = Identity::new(
            "attacker",
            IdentityClaims {
                name: Some("Attacker".to_string()),
                ..Default::default()
            },
        );

        let result = fixture
            .service()
            .create_notification(
                attacker,
                "victim".to_string(),
                CreateNotificationInput {
                    title: Some("Your account is locked".to_string()),
                    body: Some("visit evil.example".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
        assert!(fixture.notifications.for_user("victim").await.is_empty());
    }

    #[tokio::test]
    async fn test_user_cannot_send_custom_text_to_self() {
        let fixture = Fixture::new();
        let result = fixture
            .service()
            .create_notification(
                Fixture::identity("u1"),
                "u1".to_string(),
                CreateNotificationInput {
                    body: Some("anything".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_user_may_notify_self_with_template() {
        let fixture = Fixture::new();
        let me = Identity::new(
            "u1",
            IdentityClaims {
                email: Some("lan@example.com".to_string()),
                ..Default::default()
            },
        );

        let created = fixture
            .service()
            .create_notification(
                me,
                "u1".to_string(),
                CreateNotificationInput {
                    title: Some("  ".to_string()),
                    ..like()
                },
            )
            .await
            .unwrap();

        assert_eq!(created.title, None);
        assert_eq!(created.actor_name.as_deref(), Some("lan@example.com"));
    }

    #[tokio::test]
    async fn test_dispatch_without_tokens_sends_nothing() {
        let fixture = Fixture::new();
        let push = ScriptedPushTransport::default();
        let service = fixture.service_with_push(push.clone());

        let notification = service
            .create_notification(trigger("Minh"), "owner".to_string(), like())
            .await
            .unwrap();
        let summary = service.dispatch_push(notification).await;

        assert_eq!(summary.tokens, 0);
        assert!(push.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_tokens_are_removed_and_other_failures_kept() {
        let fixture = Fixture::new();
        for token in ["ok", "gone", "flaky", "bad"] {
            fixture.tokens.register_for("owner", token).await;
        }
        let push = ScriptedPushTransport::default();
        push.push_response(Ok(MulticastResponse {
            responses: vec![
                SendOutcome::delivered(),
                SendOutcome::failed("messaging/registration-token-not-registered", "gone"),
                SendOutcome::failed("messaging/internal-error", "try later"),
                SendOutcome::failed("messaging/invalid-argument", "bad token"),
            ],
        }))
        .await;
        let service = fixture.service_with_push(push.clone());

        let notification = service
            .create_notification(trigger("Minh"), "owner".to_string(), like())
            .await
            .unwrap();
        let summary = service.dispatch_push(notification).await;

        assert_eq!(summary.success, 1);
        assert_eq!(summary.failure, 3);
        assert_eq!(summary.removed_tokens, 2);
        assert_eq!(fixture.tokens.tokens_of("owner").await, vec!["ok", "flaky"]);

        let calls = push.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1.title, "Bài viết được thích");
        assert_eq!(calls[0].1.body, "Minh đã thích bài viết của bạn");
    }

    #[tokio::test]
    async fn test_failed_chunk_does_not_stop_later_chunks() {
        let fixture = Fixture::new();
        for i in 0..1_001 {
            fixture
                .tokens
                .register_for("owner", &format!("t{i:04}"))
                .await;
        }
        let push = ScriptedPushTransport::default();
        push.push_response(Err(CoreError::ExternalServiceError("unavailable".to_string())))
            .await;
        let service = fixture.service_with_push(push.clone());

        let notification = service
            .create_notification(trigger("Minh"), "owner".to_string(), like())
            .await
            .unwrap();
        let summary = service.dispatch_push(notification).await;

        let calls = push.calls().await;
        let sizes: Vec<usize> = calls.iter().map(|(tokens, _)| tokens.len()).collect();
        assert_eq!(sizes, vec![500, 500, 1]);
        assert_eq!(summary.failed_chunks, 1);
        assert_eq!(summary.success, 501);
        assert_eq!(summary.removed_tokens, 0);
    }

    #[tokio::test]
    async fn test_register_device_token_requires_value() {
        let fixture = Fixture::new();
        let service = fixture.service();

        let result = service
            .register_device_token(Fixture::identity("u1"), "  ".to_string())
            .await;
        assert_eq!(
            result,
            Err(CoreError::BadRequest("token required".to_string()))
        );

        service
            .register_device_token(Fixture::identity("u1"), "device-1".to_string())
            .await
            .unwrap();
        service
            .register_device_token(Fixture::identity("u1"), "device-1".to_string())
            .await
            .unwrap();
        assert_eq!(fixture.tokens.tokens_of("u1").await, vec!["device-1"]);
    }
}
