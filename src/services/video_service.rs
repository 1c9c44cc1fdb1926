use chrono::Utc;
use sea_orm::*;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::models::dto::{CommentRead, UserRead, VideoCreate, VideoDetail, VideoRead};
use crate::models::{comments, likes, users, videos, watch_later};
use crate::services::comment_service::CommentService;
use crate::services::engagement_service::EngagementService;
use crate::services::policy;

pub struct VideoService;

impl VideoService {
    /// Crée une vidéo pour l'appelant (creator ou admin uniquement)
    pub async fn upload<C: ConnectionTrait>(
        db: &C,
        caller: &AuthUser,
        request: VideoCreate,
    ) -> AppResult<videos::Model> {
        policy::can_upload_video(caller)?;

        let new_video = videos::ActiveModel {
            title: Set(request.title),
            description: Set(request.description),
            video_url: Set(request.video_url),
            thumbnail_url: Set(request.thumbnail_url),
            upload_time: Set(Utc::now()),
            uploader_id: Set(caller.user_id),
            ..Default::default()
        };

        let video = new_video.insert(db).await?;
        tracing::info!(video_id = video.id, uploader_id = caller.user_id, "video uploaded");

        Ok(video)
    }

    /// Toutes les vidéos, les plus récentes d'abord
    pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<videos::Model>, DbErr> {
        videos::Entity::find()
            .order_by_desc(videos::Column::UploadTime)
            .order_by_desc(videos::Column::Id)
            .all(db)
            .await
    }

    pub async fn list_by_uploader<C: ConnectionTrait>(
        db: &C,
        uploader_id: i32,
    ) -> Result<Vec<videos::Model>, DbErr> {
        videos::Entity::find()
            .filter(videos::Column::UploaderId.eq(uploader_id))
            .order_by_desc(videos::Column::UploadTime)
            .order_by_desc(videos::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_all_by_ids<C: ConnectionTrait>(
        db: &C,
        ids: Vec<i32>,
    ) -> Result<Vec<videos::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        videos::Entity::find()
            .filter(videos::Column::Id.is_in(ids))
            .order_by_desc(videos::Column::UploadTime)
            .order_by_desc(videos::Column::Id)
            .all(db)
            .await
    }

    pub async fn get_by_id<C: ConnectionTrait>(db: &C, video_id: i32) -> AppResult<videos::Model> {
        videos::Entity::find_by_id(video_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("Video"))
    }

    /// Vidéo + uploader, commentaires (plus récents d'abord), likes et watch later
    pub async fn detail<C: ConnectionTrait>(db: &C, video_id: i32) -> AppResult<VideoDetail> {
        let video = Self::get_by_id(db, video_id).await?;

        let uploader = users::Entity::find_by_id(video.uploader_id).one(db).await?;
        let comments = CommentService::list_for_video(db, video.id).await?;
        let liked_by = EngagementService::liked_by(db, video.id).await?;
        let watch_later_by = EngagementService::watch_later_by(db, video.id).await?;

        Ok(VideoDetail {
            video: VideoRead::from(video),
            uploader: uploader.map(UserRead::from),
            comments: comments.into_iter().map(CommentRead::from).collect(),
            liked_by: liked_by.into_iter().map(UserRead::from).collect(),
            watch_later_by: watch_later_by.into_iter().map(UserRead::from).collect(),
        })
    }

    /// Supprime une vidéo (uploader ou admin) avec ses commentaires,
    /// likes et entrées watch later. À appeler dans une transaction.
    pub async fn delete<C: ConnectionTrait>(
        db: &C,
        caller: &AuthUser,
        video_id: i32,
    ) -> AppResult<()> {
        let video = Self::get_by_id(db, video_id).await?;
        policy::can_delete_video(caller, &video)?;

        let removed_comments = comments::Entity::delete_many()
            .filter(comments::Column::VideoId.eq(video.id))
            .exec(db)
            .await?
            .rows_affected;

        likes::Entity::delete_many()
            .filter(likes::Column::VideoId.eq(video.id))
            .exec(db)
            .await?;

        watch_later::Entity::delete_many()
            .filter(watch_later::Column::VideoId.eq(video.id))
            .exec(db)
            .await?;

        videos::Entity::delete_by_id(video.id).exec(db).await?;

        tracing::info!(
            video_id = video.id,
            deleted_by = caller.user_id,
            removed_comments,
            "video deleted"
        );

        Ok(())
    }
}
