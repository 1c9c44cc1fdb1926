use sea_orm::*;

use crate::error::{AppError, AppResult};
use crate::models::dto::TokenResponse;
use crate::models::users;
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtKeys;
use crate::utils::password;

pub struct AuthService;

impl AuthService {
    /// Vérifie email + mot de passe et émet un bearer token.
    /// Email inconnu et mauvais mot de passe donnent la même erreur.
    pub async fn login<C: ConnectionTrait>(
        db: &C,
        keys: &JwtKeys,
        email: &str,
        plain_password: &str,
    ) -> AppResult<TokenResponse> {
        let invalid = || AppError::Unauthorized("Invalid credentials".to_string());

        let Some(user) = UserService::find_by_email(db, email).await? else {
            tracing::warn!("login attempt for unknown email");
            return Err(invalid());
        };

        let is_valid = password::verify_password(plain_password, &user.password_hash)
            .map_err(AppError::Internal)?;

        if !is_valid {
            tracing::warn!(user_id = user.id, "login failed: wrong password");
            return Err(invalid());
        }

        let token = keys
            .generate_token(user.id, &user.email)
            .map_err(AppError::Internal)?;

        tracing::info!(user_id = user.id, "user logged in");
        Ok(TokenResponse::bearer(token))
    }

    /// Résout l'identité de l'appelant à partir du token
    pub async fn resolve_caller<C: ConnectionTrait>(
        db: &C,
        keys: &JwtKeys,
        token: &str,
    ) -> AppResult<users::Model> {
        let claims = keys.verify_token(token).map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            AppError::unauthorized()
        })?;

        UserService::find_by_email(db, &claims.sub)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = claims.uid, "token subject no longer exists");
                AppError::unauthorized()
            })
    }
}
