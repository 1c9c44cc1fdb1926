#![allow(dead_code)]

use actix_web::http::header;
use chrono::Duration;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use tube_backend::db;
use tube_backend::models::dto::RegisterRequest;
use tube_backend::models::users::Role;
use tube_backend::services::user_service::UserService;
use tube_backend::utils::jwt::JwtKeys;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_PASSWORD: &str = "password123";

pub struct TestContext {
    pub db: DatabaseConnection,
    pub keys: JwtKeys,
}

pub struct TestUser {
    pub id: i32,
    pub email: String,
    pub token: String,
}

/// Base SQLite en mémoire: une seule connexion, sinon chaque connexion
/// du pool verrait une base vide.
pub async fn setup() -> TestContext {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    db::create_schema(&db)
        .await
        .expect("Failed to create schema");

    TestContext {
        db,
        keys: JwtKeys::new(TEST_SECRET, Duration::minutes(30)),
    }
}

/// Crée un user directement via le service et lui génère un token
pub async fn create_user(ctx: &TestContext, username: &str, role: Role) -> TestUser {
    let email = format!("{}@example.com", username);
    let user = UserService::register(
        &ctx.db,
        RegisterRequest {
            username: username.to_string(),
            email: email.clone(),
            password: TEST_PASSWORD.to_string(),
            role: Some(role),
        },
    )
    .await
    .expect("Failed to create user");

    let token = ctx
        .keys
        .generate_token(user.id, &user.email)
        .expect("Failed to generate token");

    TestUser {
        id: user.id,
        email,
        token,
    }
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}
