use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::LocalBoxFuture;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::users::{self, Role};
use crate::services::auth_service::AuthService;
use crate::utils::jwt::JwtKeys;

/// Structure qui contient les infos de l'utilisateur authentifié
/// Utilisée comme extracteur dans les routes protégées
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<users::Model> for AuthUser {
    fn from(user: users::Model) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

/// Extrait le token du header "Authorization: Bearer <token>"
fn bearer_token(req: &HttpRequest) -> Result<String, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(AppError::unauthorized)?;

    let auth_str = auth_header.to_str().map_err(|_| AppError::unauthorized())?;

    auth_str
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(AppError::unauthorized)
}

/// Le user est rechargé depuis la BD à chaque requête:
/// un token valide dont le user a été supprimé est refusé.
impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = bearer_token(req);
        let db = req.app_data::<web::Data<DatabaseConnection>>().cloned();
        let keys = req.app_data::<web::Data<JwtKeys>>().cloned();

        Box::pin(async move {
            let (Some(db), Some(keys)) = (db, keys) else {
                return Err(AppError::Internal(
                    "Authentication state not configured".to_string(),
                ));
            };

            let token = token.inspect_err(|_| {
                tracing::warn!("missing or malformed Authorization header");
            })?;

            let user = AuthService::resolve_caller(db.get_ref(), &keys, &token).await?;
            Ok(AuthUser::from(user))
        })
    }
}
