mod common;

use axum::http::StatusCode;
use common::{ApiContext, admin_token, token};
use serde_json::{Value, json};
use test_context::test_context;

async fn post_comment(ctx: &ApiContext, bearer: &str, text: &str) -> Value {
    let response = ctx
        .server
        .post("/comments")
        .authorization_bearer(bearer)
        .json(&json!({ "foodId": "pho", "text": text }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_comment_requires_food_and_text(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/comments")
        .authorization_bearer(token("u1"))
        .json(&json!({ "foodId": "pho", "text": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "foodId and text required" }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_comment_without_food_id_is_rejected(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/comments")
        .authorization_bearer(token("u1"))
        .json(&json!({ "text": "Ngon" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "foodId and text required" }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_listing_requires_food_id(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/comments")
        .authorization_bearer(token("u1"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "foodId required" }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_created_comments_are_listed(ctx: &mut ApiContext) {
    let bearer = token("u1");
    let created = post_comment(ctx, &bearer, "Ngon quá").await;
    assert_eq!(created["ok"], true);
    assert_eq!(created["comment"]["authorId"], "u1");
    assert_eq!(created["comment"]["authorName"], "User u1");
    assert_eq!(created["comment"]["foodId"], "pho");

    let listed = ctx
        .server
        .get("/comments")
        .add_query_param("foodId", "pho")
        .add_query_param("limit", "abc")
        .authorization_bearer(&bearer)
        .await;
    listed.assert_status_ok();

    let body = listed.json::<Value>();
    assert_eq!(body["ok"], true);
    let comments = body["comments"].as_array().expect("comments array");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["text"], "Ngon quá");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_only_author_or_admin_deletes(ctx: &mut ApiContext) {
    let created = post_comment(ctx, &token("author"), "Hơi mặn").await;
    let path = format!("/comments/{}", created["comment"]["id"].as_str().unwrap());

    let stranger = ctx
        .server
        .delete(&path)
        .authorization_bearer(token("stranger"))
        .await;
    stranger.assert_status(StatusCode::FORBIDDEN);
    stranger.assert_json(&json!({ "error": "forbidden" }));

    let admin = ctx
        .server
        .delete(&path)
        .authorization_bearer(admin_token("moderator"))
        .await;
    admin.assert_status_ok();
    admin.assert_json(&json!({ "ok": true }));

    let gone = ctx
        .server
        .delete(&path)
        .authorization_bearer(token("author"))
        .await;
    gone.assert_status(StatusCode::NOT_FOUND);
    gone.assert_json(&json!({ "error": "not_found" }));
}
