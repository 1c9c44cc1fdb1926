use actix_web::HttpServer;
use chrono::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tube_backend::{config::AppConfig, create_app, db, utils::jwt::JwtKeys};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,sqlx=warn".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    tracing::info!("connecting to database");
    let db = db::establish_connection(&config)
        .await
        .map_err(std::io::Error::other)?;

    if config.auto_create_schema {
        db::create_schema(&db)
            .await
            .map_err(std::io::Error::other)?;
        tracing::info!("database schema ready");
    }

    let keys = JwtKeys::new(
        &config.jwt_secret,
        Duration::minutes(config.jwt_expiration_minutes),
    );

    tracing::info!(host = %config.host, port = config.port, "starting server");

    HttpServer::new(move || create_app(db.clone(), keys.clone()))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
