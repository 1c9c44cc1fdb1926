pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web,
};
use sea_orm::DatabaseConnection;
use tracing_actix_web::TracingLogger;

use crate::utils::jwt::JwtKeys;

/// Construit l'application (utilisée par main et par les tests d'intégration)
pub fn create_app(
    db: DatabaseConnection,
    keys: JwtKeys,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(TracingLogger::default())
        .app_data(web::Data::new(db))
        .app_data(web::Data::new(keys))
        .configure(routes::configure_routes)
}
