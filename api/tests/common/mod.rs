#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use jsonwebtoken::{EncodingKey, Header, encode};
use mealkit_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use mealkit_core::{
    application::{create_service_with, memory_repositories},
    domain::{common::MealkitConfig, menu::picker::SeededPicker},
    infrastructure::{auth::jwt_verifier::JwtTokenVerifier, memory::InMemoryFoodRepository},
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;

pub const SECRET: &str = "integration-secret";

/// Catalog order matters: menus are topped up from the front.
pub const CATALOG: &str = r#"[
    { "id": "pho", "name": "Phở bò", "mealType": ["Bữa chính"] },
    { "id": "goi-cuon", "name": "Gỏi cuốn", "categoryName": "Khai vị" },
    { "id": "rau-muong", "name": "Rau muống xào", "mealType": ["Món phụ"] },
    { "id": "com-tam", "name": "Cơm tấm", "mealType": ["main"] },
    { "id": "banh-flan", "name": "Bánh flan", "category": "Tráng miệng" },
    { "id": "che", "name": "Chè ba màu", "mealType": ["Tráng miệng"] }
]"#;

pub struct ApiContext {
    pub server: TestServer,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let args = Args::try_parse_from([
            "mealkit-api",
            "--storage-backend",
            "memory",
            "--auth-jwt-secret",
            SECRET,
        ])
        .expect("test args parse");
        let config = MealkitConfig::from(args.clone());

        let foods = InMemoryFoodRepository::from_json(CATALOG).expect("catalog parses");
        let verifier = JwtTokenVerifier::new(&config.auth).expect("verifier builds");
        let service = create_service_with(
            memory_repositories(foods),
            verifier,
            Arc::new(SeededPicker::new(7)),
            config.menu,
        );

        let state = AppState::new(Arc::new(args), service);
        let server = TestServer::new(router(state).expect("router builds")).expect("server starts");

        Self { server }
    }
}

fn sign(claims: Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("token signs")
}

fn expiry() -> i64 {
    chrono::Utc::now().timestamp() + 3600
}

pub fn token(uid: &str) -> String {
    sign(json!({ "sub": uid, "name": format!("User {uid}"), "exp": expiry() }))
}

pub fn admin_token(uid: &str) -> String {
    sign(json!({ "sub": uid, "name": format!("Admin {uid}"), "admin": true, "exp": expiry() }))
}
