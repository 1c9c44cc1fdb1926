use actix_web::{HttpResponse, post, web};
use sea_orm::{DatabaseConnection, TransactionTrait};
use validator::Validate;

use crate::error::AppResult;
use crate::models::dto::{LoginRequest, RegisterRequest, UserRead};
use crate::services::auth_service::AuthService;
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtKeys;

/// POST /auth/register - Créer un compte (PUBLIC)
#[post("/register")]
pub async fn register(
    body: web::Json<RegisterRequest>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    body.validate()?;

    let txn = db.begin().await?;
    let user = UserService::register(&txn, body.into_inner()).await?;
    txn.commit().await?;

    Ok(HttpResponse::Ok().json(UserRead::from(user)))
}

/// POST /auth/login - Se connecter (PUBLIC)
#[post("/login")]
pub async fn login(
    body: web::Json<LoginRequest>,
    db: web::Data<DatabaseConnection>,
    keys: web::Data<JwtKeys>,
) -> AppResult<HttpResponse> {
    // pas de validation de format : un email mal formé est un mauvais identifiant (401)
    let token = AuthService::login(db.get_ref(), &keys, &body.email, &body.password).await?;

    Ok(HttpResponse::Ok().json(token))
}

pub fn auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/auth").service(register).service(login));
}
