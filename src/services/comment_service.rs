use chrono::Utc;
use sea_orm::*;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::models::comments;
use crate::models::dto::{CommentCreate, CommentStats};
use crate::services::policy;
use crate::services::video_service::VideoService;

pub struct CommentService;

impl CommentService {
    /// Ajoute un commentaire sur une vidéo existante
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        caller: &AuthUser,
        request: CommentCreate,
    ) -> AppResult<comments::Model> {
        let video = VideoService::get_by_id(db, request.video_id).await?;

        let new_comment = comments::ActiveModel {
            content: Set(request.content),
            created_at: Set(Utc::now()),
            user_id: Set(caller.user_id),
            video_id: Set(video.id),
            ..Default::default()
        };

        let comment = new_comment.insert(db).await?;
        tracing::info!(comment_id = comment.id, video_id = video.id, "comment added");

        Ok(comment)
    }

    pub async fn get_by_id<C: ConnectionTrait>(
        db: &C,
        comment_id: i32,
    ) -> AppResult<comments::Model> {
        comments::Entity::find_by_id(comment_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("Comment"))
    }

    /// Modifie le contenu (auteur uniquement)
    pub async fn update<C: ConnectionTrait>(
        db: &C,
        caller: &AuthUser,
        comment_id: i32,
        content: String,
    ) -> AppResult<comments::Model> {
        let comment = Self::get_by_id(db, comment_id).await?;
        policy::can_edit_comment(caller, &comment)?;

        let mut active_model: comments::ActiveModel = comment.into();
        active_model.content = Set(content);

        Ok(active_model.update(db).await?)
    }

    /// Supprime un commentaire (auteur ou admin)
    pub async fn delete<C: ConnectionTrait>(
        db: &C,
        caller: &AuthUser,
        comment_id: i32,
    ) -> AppResult<()> {
        let comment = Self::get_by_id(db, comment_id).await?;
        policy::can_delete_comment(caller, &comment)?;

        comments::Entity::delete_by_id(comment.id).exec(db).await?;
        tracing::info!(comment_id, deleted_by = caller.user_id, "comment deleted");

        Ok(())
    }

    /// Commentaires d'une vidéo, les plus récents d'abord
    pub async fn list_for_video<C: ConnectionTrait>(
        db: &C,
        video_id: i32,
    ) -> Result<Vec<comments::Model>, DbErr> {
        comments::Entity::find()
            .filter(comments::Column::VideoId.eq(video_id))
            .order_by_desc(comments::Column::CreatedAt)
            .order_by_desc(comments::Column::Id)
            .all(db)
            .await
    }

    pub async fn list_by_user<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
    ) -> Result<Vec<comments::Model>, DbErr> {
        comments::Entity::find()
            .filter(comments::Column::UserId.eq(user_id))
            .order_by_desc(comments::Column::CreatedAt)
            .order_by_desc(comments::Column::Id)
            .all(db)
            .await
    }

    /// Nombre de commentaires + dernier commentaire (null si aucun)
    pub async fn stats<C: ConnectionTrait>(db: &C, video_id: i32) -> Result<CommentStats, DbErr> {
        let total_comments = comments::Entity::find()
            .filter(comments::Column::VideoId.eq(video_id))
            .count(db)
            .await?;

        let latest = comments::Entity::find()
            .filter(comments::Column::VideoId.eq(video_id))
            .order_by_desc(comments::Column::CreatedAt)
            .order_by_desc(comments::Column::Id)
            .one(db)
            .await?;

        Ok(CommentStats {
            video_id,
            total_comments,
            latest_comment_time: latest.as_ref().map(|c| c.created_at),
            latest_comment: latest.map(|c| c.content),
        })
    }
}
