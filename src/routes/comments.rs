use actix_web::{HttpResponse, delete, get, post, put, web};
use sea_orm::{DatabaseConnection, TransactionTrait};
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::models::dto::{CommentCreate, CommentRead, CommentUpdate};
use crate::services::comment_service::CommentService;

/// POST /comments - Commenter une vidéo (PROTÉGÉE)
#[post("")]
pub async fn add_comment(
    auth_user: AuthUser,
    body: web::Json<CommentCreate>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    body.validate()?;

    let txn = db.begin().await?;
    let comment = CommentService::create(&txn, &auth_user, body.into_inner()).await?;
    txn.commit().await?;

    Ok(HttpResponse::Created().json(CommentRead::from(comment)))
}

/// GET /comments/video/{id} - Plus récents d'abord (PUBLIC)
#[get("/video/{video_id}")]
pub async fn comments_for_video(
    path: web::Path<i32>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let comments = CommentService::list_for_video(db.get_ref(), path.into_inner()).await?;
    let response: Vec<CommentRead> = comments.into_iter().map(CommentRead::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// GET /comments/video/{id}/stats (PUBLIC)
#[get("/video/{video_id}/stats")]
pub async fn comment_stats(
    path: web::Path<i32>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let stats = CommentService::stats(db.get_ref(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(stats))
}

/// GET /comments/user/{id} - Plus récents d'abord (PUBLIC)
#[get("/user/{user_id}")]
pub async fn comments_by_user(
    path: web::Path<i32>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let comments = CommentService::list_by_user(db.get_ref(), path.into_inner()).await?;
    let response: Vec<CommentRead> = comments.into_iter().map(CommentRead::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// PUT /comments/{id} - Modifier son commentaire (PROTÉGÉE, auteur)
#[put("/{comment_id}")]
pub async fn edit_comment(
    auth_user: AuthUser,
    path: web::Path<i32>,
    body: web::Json<CommentUpdate>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    body.validate()?;

    let txn = db.begin().await?;
    let comment = CommentService::update(
        &txn,
        &auth_user,
        path.into_inner(),
        body.into_inner().content,
    )
    .await?;
    txn.commit().await?;

    Ok(HttpResponse::Ok().json(CommentRead::from(comment)))
}

/// DELETE /comments/{id} (PROTÉGÉE, auteur/admin)
#[delete("/{comment_id}")]
pub async fn delete_comment(
    auth_user: AuthUser,
    path: web::Path<i32>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let txn = db.begin().await?;
    CommentService::delete(&txn, &auth_user, path.into_inner()).await?;
    txn.commit().await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn comments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/comments")
            .service(add_comment)
            .service(comments_for_video)
            .service(comment_stats)
            .service(comments_by_user)
            .service(edit_comment)
            .service(delete_comment),
    );
}
