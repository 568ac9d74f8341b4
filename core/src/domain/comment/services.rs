use tracing::{debug, info, instrument, warn};

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    comment::{
        entities::{Comment, CommentConfig},
        policies::CommentPolicy,
        ports::{CommentRepository, CommentService},
        value_objects::{CreateCommentInput, GetCommentsFilter, resolve_comment_limit},
    },
    common::{
        entities::app_errors::CoreError, non_blank, policies::ensure_policy, services::Service,
    },
    food::ports::{FoodRepository, SavedFoodRepository},
    meal_plan::ports::MealPlanRepository,
    notification::ports::{DeviceTokenRepository, NotificationRepository, PushTransport},
    user::ports::UserDirectory,
};

impl<F, SF, MP, CM, UD, DT, NT, PT, TV> Service<F, SF, MP, CM, UD, DT, NT, PT, TV>
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
    /// Public name of the caller: the stored profile first, then the token's
    /// `name` and `email` claims. Lookup failures are not fatal.
    async fn author_name(&self, identity: &Identity) -> Option<String> {
        let stored = match self.user_directory.get_profile(identity.uid.clone()).await {
            Ok(profile) => profile.and_then(|profile| profile.public_name()),
            Err(e) => {
                warn!(user_id = %identity.uid, "author lookup failed: {}", e);
                None
            }
        };

        stored
            .or_else(|| non_blank(identity.claims.name.clone()))
            .or_else(|| non_blank(identity.claims.email.clone()))
    }
}

impl<F, SF, MP, CM, UD, DT, NT, PT, TV> CommentService
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
    #[instrument(skip(self, identity, filter), fields(uid = %identity.uid))]
    async fn get_comments(
        &self,
        identity: Identity,
        filter: GetCommentsFilter,
    ) -> Result<Vec<Comment>, CoreError> {
        let food_id = non_blank(filter.food_id)
            .ok_or_else(|| CoreError::BadRequest("foodId required".to_string()))?;
        let limit = resolve_comment_limit(filter.limit.as_deref());

        let comments = self.comment_repository.list_by_food(food_id, limit).await?;
        debug!(count = comments.len(), limit, "comments listed");

        Ok(comments)
    }

    #[instrument(skip(self, identity, input), fields(uid = %identity.uid))]
    async fn create_comment(
        &self,
        identity: Identity,
        input: CreateCommentInput,
    ) -> Result<Comment, CoreError> {
        let (Some(food_id), Some(text)) = (non_blank(input.food_id), non_blank(input.text)) else {
            return Err(CoreError::BadRequest(
                "foodId and text required".to_string(),
            ));
        };

        let author_name = self.author_name(&identity).await;
        let comment = Comment::new(CommentConfig {
            food_id,
            author_id: identity.uid,
            author_name,
            text,
            reply_to: non_blank(input.reply_to),
        });

        let created = self.comment_repository.create(comment).await?;
        info!(comment_id = %created.id, food_id = %created.food_id, "comment created");

        Ok(created)
    }

    #[instrument(skip(self, identity), fields(uid = %identity.uid))]
    async fn delete_comment(
        &self,
        identity: Identity,
        comment_id: String,
    ) -> Result<(), CoreError> {
        let comment = self
            .comment_repository
            .get_by_id(comment_id.clone())
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_delete_comment(&identity, &comment).await,
            "only the author or an admin can delete this comment",
        )?;

        self.comment_repository.delete(comment_id).await?;
        info!(comment_id = %comment.id, "comment deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{
        authentication::value_objects::{Identity, IdentityClaims},
        comment::{
            ports::CommentService,
            value_objects::{CreateCommentInput, GetCommentsFilter},
        },
        common::{entities::app_errors::CoreError, testing::Fixture},
        user::entities::UserProfile,
    };

    fn input(food_id: &str, text: &str) -> CreateCommentInput {
        CreateCommentInput {
            food_id: Some(food_id.to_string()),
            text: Some(text.to_string()),
            reply_to: None,
        }
    }

    #[tokio::test]
    async fn test_create_comment_trims_and_resolves_author() {
        let fixture = Fixture::new();
        fixture
            .users
            .insert(UserProfile {
                id: "u1".to_string(),
                display_name: None,
                email: Some("lan@example.com".to_string()),
            })
            .await;

        let comment = fixture
            .service()
            .create_comment(
                Fixture::identity("u1"),
                CreateCommentInput {
                    food_id: Some(" pho ".to_string()),
                    text: Some("  ngon quá ".to_string()),
                    reply_to: Some("   ".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(comment.food_id, "pho");
        assert_eq!(comment.text, "ngon quá");
        assert_eq!(comment.author_id, "u1");
        assert_eq!(comment.author_name.as_deref(), Some("lan@example.com"));
        assert_eq!(comment.reply_to, None);
    }

    #[tokio::test]
    async fn test_create_comment_requires_food_and_text() {
        let fixture = Fixture::new();
        let result = fixture
            .service()
            .create_comment(Fixture::identity("u1"), input("pho", "   "))
            .await;

        assert_eq!(
            result,
            Err(CoreError::BadRequest("foodId and text required".to_string()))
        );
    }

    #[tokio::test]
    async fn test_author_name_falls_back_to_token_claims() {
        let fixture = Fixture::new();
        let service = fixture.service();

        let named = Identity::new(
            "u1",
            IdentityClaims {
                name: Some("Lan".to_string()),
                email: Some("lan@example.com".to_string()),
                ..Default::default()
            },
        );
        let comment = service
            .create_comment(named, input("pho", "hi"))
            .await
            .unwrap();
        assert_eq!(comment.author_name.as_deref(), Some("Lan"));

        let email_only = Identity::new(
            "u2",
            IdentityClaims {
                name: Some(" ".to_string()),
                email: Some("binh@example.com".to_string()),
                ..Default::default()
            },
        );
        let comment = service
            .create_comment(email_only, input("pho", "hi"))
            .await
            .unwrap();
        assert_eq!(comment.author_name.as_deref(), Some("binh@example.com"));
    }

    #[tokio::test]
    async fn test_unknown_author_has_no_name() {
        let fixture = Fixture::new();
        let comment = fixture
            .service()
            .create_comment(Fixture::identity("ghost"), input("pho", "hi"))
            .await
            .unwrap();
        assert_eq!(comment.author_name, None);
    }

    #[tokio::test]
    async fn test_list_comments_newest_first_with_limit() {
        let fixture = Fixture::new();
        let service = fixture.service();
        for text in ["one", "two", "three"] {
            service
                .create_comment(Fixture::identity("u1"), input("pho", text))
                .await
                .unwrap();
        }
        service
            .create_comment(Fixture::identity("u1"), input("bun", "elsewhere"))
            .await
            .unwrap();

        let comments = service
            .get_comments(
                Fixture::identity("u2"),
                GetCommentsFilter {
                    food_id: Some("pho".to_string()),
                    limit: Some("2".to_string()),
                },
            )
            .await
            .unwrap();

        let texts: Vec<&str> = comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["three", "two"]);
    }

    #[tokio::test]
    async fn test_list_comments_requires_food_id() {
        let fixture = Fixture::new();
        let result = fixture
            .service()
            .get_comments(Fixture::identity("u1"), GetCommentsFilter::default())
            .await;
        assert_eq!(
            result,
            Err(CoreError::BadRequest("foodId required".to_string()))
        );
    }

    #[tokio::test]
    async fn test_delete_comment_permissions() {
        let fixture = Fixture::new();
        let service = fixture.service();
        let comment = service
            .create_comment(Fixture::identity("author"), input("pho", "hi"))
            .await
            .unwrap();

        let stranger = service
            .delete_comment(Fixture::identity("stranger"), comment.id.clone())
            .await;
        assert!(matches!(stranger, Err(CoreError::Forbidden(_))));

        service
            .delete_comment(Fixture::admin("moderator"), comment.id.clone())
            .await
            .unwrap();

        let again = service
            .delete_comment(Fixture::identity("author"), comment.id)
            .await;
        assert_eq!(again, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_author_can_delete_own_comment() {
        let fixture = Fixture::new();
        let service = fixture.service();
        let comment = service
            .create_comment(Fixture::identity("author"), input("pho", "hi"))
            .await
            .unwrap();

        service
            .delete_comment(Fixture::identity("author"), comment.id.clone())
            .await
            .unwrap();
        assert_eq!(fixture.comments.count().await, 0);
    }
}
