pub mod auth;
pub mod comments;
pub mod health;
pub mod users;
pub mod videos;

use actix_web::web;

use crate::error::AppError;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Corps JSON ou paramètres de chemin invalides -> 400 au format { "error": ... }
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );

    cfg.service(health::health_check)
        .configure(auth::auth_routes)
        .configure(users::users_routes)
        .configure(videos::videos_routes)
        .configure(comments::comments_routes);
}
