use utoipa::OpenApi;

use crate::application::http::{
    comment::router::CommentApiDoc, health::router::HealthApiDoc,
    meal_plan::router::MealPlanApiDoc, menu::router::MenuApiDoc,
    notification::router::NotificationApiDoc, saved_food::router::SavedFoodApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mealkit API"
    ),
    nest(
        (path = "/comments", api = CommentApiDoc),
        (path = "/saves", api = SavedFoodApiDoc),
    )
)]
pub struct ApiDoc;

/// [`ApiDoc`] plus the features whose routes share no common prefix.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(MenuApiDoc::openapi());
    openapi.merge(MealPlanApiDoc::openapi());
    openapi.merge(NotificationApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let openapi = api_doc();
        let paths: Vec<&str> = openapi.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/menu",
            "/slot/reload",
            "/mealPlan",
            "/comments",
            "/comments/{comment_id}",
            "/saves/{food_id}",
            "/fcmTokens",
            "/users/{user_id}/notifications",
            "/health",
        ] {
            assert!(paths.contains(&expected), "{expected} missing from {paths:?}");
        }
    }
}
