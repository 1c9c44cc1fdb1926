use actix_web::{HttpResponse, delete, get, post, web};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::models::dto::{UserRead, WatchLaterResponse};
use crate::services::engagement_service::EngagementService;
use crate::services::social_service::SocialService;
use crate::services::user_service::UserService;

/// GET /users/me - Profil complet de l'appelant (PROTÉGÉE)
#[get("/me")]
pub async fn me(
    auth_user: AuthUser,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let user = UserService::get_by_id(db.get_ref(), auth_user.user_id).await?;
    let detail = UserService::detail(db.get_ref(), user).await?;

    Ok(HttpResponse::Ok().json(detail))
}

/// POST /users/{id}/subscribe - S'abonner (PROTÉGÉE)
#[post("/{user_id}/subscribe")]
pub async fn subscribe(
    auth_user: AuthUser,
    path: web::Path<i32>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let txn = db.begin().await?;
    let target = SocialService::subscribe(&txn, &auth_user, path.into_inner()).await?;
    txn.commit().await?;

    Ok(HttpResponse::Ok().json(UserRead::from(target)))
}

/// DELETE /users/{id}/unsubscribe - Se désabonner (PROTÉGÉE)
#[delete("/{user_id}/unsubscribe")]
pub async fn unsubscribe(
    auth_user: AuthUser,
    path: web::Path<i32>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let txn = db.begin().await?;
    SocialService::unsubscribe(&txn, &auth_user, path.into_inner()).await?;
    txn.commit().await?;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /users/{id}/subscribers - Liste des abonnés (PUBLIC)
#[get("/{user_id}/subscribers")]
pub async fn subscribers(
    path: web::Path<i32>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let users = SocialService::list_subscribers(db.get_ref(), path.into_inner()).await?;
    let response: Vec<UserRead> = users.into_iter().map(UserRead::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// POST /users/watchlater/{video_id} - Ajouter/retirer de "regarder plus tard" (PROTÉGÉE)
#[post("/watchlater/{video_id}")]
pub async fn toggle_watch_later(
    auth_user: AuthUser,
    path: web::Path<i32>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let txn = db.begin().await?;
    let in_watch_later =
        EngagementService::toggle_watch_later(&txn, &auth_user, path.into_inner()).await?;
    txn.commit().await?;

    let message = if in_watch_later {
        "Video added to watch later list"
    } else {
        "Video removed from watch later list"
    };

    Ok(HttpResponse::Ok().json(WatchLaterResponse {
        message: message.to_string(),
        in_watch_later,
    }))
}

pub fn users_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(me)
            .service(toggle_watch_later)
            .service(subscribe)
            .service(unsubscribe)
            .service(subscribers),
    );
}
