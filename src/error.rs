// ============================================================================
// ERREURS APPLICATIVES
// ============================================================================
//
// Description:
//   Type d'erreur unique pour les services et les routes. Chaque variante
//   correspond à un code HTTP (voir status_code). Les routes retournent
//   AppResult<HttpResponse> et actix-web convertit l'erreur en réponse JSON.
//
// Format de réponse:
//   { "error": "<message>" }
//   Les erreurs de validation ajoutent "fields" (rapport du crate validator).
//
// Points d'attention:
//   - Conflict est renvoyé en 400 (doublon email, abonnement déjà existant)
//   - Une violation de contrainte d'unicité côté BD devient aussi un Conflict
//   - Les erreurs BD/internes ne sont jamais exposées au client, seulement loggées
//
// ============================================================================

use actix_web::{
    HttpResponse, ResponseError,
    http::{StatusCode, header},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use validator::ValidationErrors;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn unauthorized() -> Self {
        AppError::Unauthorized("Could not validate credentials".to_string())
    }

    pub fn not_found(what: &str) -> Self {
        AppError::NotFound(format!("{} not found", what))
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        // deux requêtes concurrentes peuvent passer les vérifications préalables
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::warn!(%detail, "unique constraint violation");
                AppError::Conflict("Resource already exists".to_string())
            }
            _ => AppError::Database(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::BadRequest(_) | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());

        match self {
            AppError::Validation(errors) => builder.json(serde_json::json!({
                "error": self.to_string(),
                "fields": errors
            })),
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                builder.json(serde_json::json!({
                    "error": "Internal server error"
                }))
            }
            AppError::Unauthorized(_) => builder
                .insert_header((header::WWW_AUTHENTICATE, "Bearer"))
                .json(serde_json::json!({ "error": self.to_string() })),
            _ => builder.json(serde_json::json!({ "error": self.to_string() })),
        }
    }
}
