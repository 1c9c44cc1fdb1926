use actix_web::{HttpResponse, delete, get, post, web};
use sea_orm::{DatabaseConnection, TransactionTrait};
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::models::dto::{LikeResponse, VideoCreate, VideoRead};
use crate::services::engagement_service::EngagementService;
use crate::services::video_service::VideoService;

/// POST /videos - Publier une vidéo (PROTÉGÉE, creator/admin)
#[post("")]
pub async fn upload_video(
    auth_user: AuthUser,
    body: web::Json<VideoCreate>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    body.validate()?;

    let txn = db.begin().await?;
    let video = VideoService::upload(&txn, &auth_user, body.into_inner()).await?;
    txn.commit().await?;

    Ok(HttpResponse::Created().json(VideoRead::from(video)))
}

/// GET /videos - Toutes les vidéos (PUBLIC)
#[get("")]
pub async fn list_videos(db: web::Data<DatabaseConnection>) -> AppResult<HttpResponse> {
    let videos = VideoService::list_all(db.get_ref()).await?;
    let response: Vec<VideoRead> = videos.into_iter().map(VideoRead::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// GET /videos/uploader/{id} - Vidéos d'un uploader (PUBLIC)
#[get("/uploader/{user_id}")]
pub async fn list_videos_by_uploader(
    path: web::Path<i32>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let videos = VideoService::list_by_uploader(db.get_ref(), path.into_inner()).await?;
    let response: Vec<VideoRead> = videos.into_iter().map(VideoRead::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// GET /videos/{id} - Détail d'une vidéo (PUBLIC)
#[get("/{video_id}")]
pub async fn get_video(
    path: web::Path<i32>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let detail = VideoService::detail(db.get_ref(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(detail))
}

/// POST /videos/{id}/like - Like/unlike (PROTÉGÉE)
#[post("/{video_id}/like")]
pub async fn toggle_like(
    auth_user: AuthUser,
    path: web::Path<i32>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let txn = db.begin().await?;
    let liked = EngagementService::toggle_like(&txn, &auth_user, path.into_inner()).await?;
    txn.commit().await?;

    let action = if liked { "liked" } else { "unliked" };

    Ok(HttpResponse::Ok().json(LikeResponse {
        message: format!("Video {} successfully", action),
        liked,
    }))
}

/// DELETE /videos/{id} - Supprimer une vidéo (PROTÉGÉE, uploader/admin)
#[delete("/{video_id}")]
pub async fn delete_video(
    auth_user: AuthUser,
    path: web::Path<i32>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let txn = db.begin().await?;
    VideoService::delete(&txn, &auth_user, path.into_inner()).await?;
    txn.commit().await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn videos_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/videos")
            .service(upload_video)
            .service(list_videos)
            .service(list_videos_by_uploader)
            .service(get_video)
            .service(toggle_like)
            .service(delete_video),
    );
}
