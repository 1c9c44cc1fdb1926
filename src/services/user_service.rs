use sea_orm::*;

use crate::error::{AppError, AppResult};
use crate::models::dto::{RegisterRequest, UserDetail, UserRead, VideoRead};
use crate::models::{likes, users, videos, watch_later};
use crate::services::social_service::SocialService;
use crate::services::video_service::VideoService;
use crate::utils::password;

pub struct UserService;

impl UserService {
    /// Crée un compte. Email et username doivent être libres.
    /// Le rôle vaut viewer si absent de la requête.
    pub async fn register<C: ConnectionTrait>(
        db: &C,
        request: RegisterRequest,
    ) -> AppResult<users::Model> {
        if Self::find_by_email(db, &request.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let username_taken = users::Entity::find()
            .filter(users::Column::Username.eq(&request.username))
            .one(db)
            .await?
            .is_some();
        if username_taken {
            return Err(AppError::Conflict("Username already taken".to_string()));
        }

        let password_hash =
            password::hash_password(&request.password).map_err(AppError::Internal)?;

        let new_user = users::ActiveModel {
            username: Set(request.username),
            email: Set(request.email),
            password_hash: Set(password_hash),
            role: Set(request.role.unwrap_or_default()),
            ..Default::default()
        };

        let user = new_user.insert(db).await?;
        tracing::info!(user_id = user.id, role = ?user.role, "user registered");

        Ok(user)
    }

    pub async fn find_by_email<C: ConnectionTrait>(
        db: &C,
        email: &str,
    ) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(db)
            .await
    }

    /// Comme find_by_id mais NotFound si absent
    pub async fn get_by_id<C: ConnectionTrait>(db: &C, user_id: i32) -> AppResult<users::Model> {
        users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("User"))
    }

    pub async fn find_all_by_ids<C: ConnectionTrait>(
        db: &C,
        ids: Vec<i32>,
    ) -> Result<Vec<users::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        users::Entity::find()
            .filter(users::Column::Id.is_in(ids))
            .order_by_asc(users::Column::Id)
            .all(db)
            .await
    }

    /// Profil complet: vidéos uploadées, likées, à regarder plus tard, abonnés et abonnements
    pub async fn detail<C: ConnectionTrait>(db: &C, user: users::Model) -> AppResult<UserDetail> {
        let uploaded_videos = videos::Entity::find()
            .filter(videos::Column::UploaderId.eq(user.id))
            .order_by_desc(videos::Column::UploadTime)
            .all(db)
            .await?;

        let liked_ids: Vec<i32> = likes::Entity::find()
            .filter(likes::Column::UserId.eq(user.id))
            .all(db)
            .await?
            .into_iter()
            .map(|edge| edge.video_id)
            .collect();

        let watch_later_ids: Vec<i32> = watch_later::Entity::find()
            .filter(watch_later::Column::UserId.eq(user.id))
            .all(db)
            .await?
            .into_iter()
            .map(|edge| edge.video_id)
            .collect();

        let subscribers = SocialService::subscribers_of(db, user.id).await?;
        let subscriptions = SocialService::subscriptions_of(db, user.id).await?;

        Ok(UserDetail {
            user: UserRead::from(user),
            uploaded_videos: into_reads(uploaded_videos),
            liked_videos: into_reads(VideoService::find_all_by_ids(db, liked_ids).await?),
            watch_later_videos: into_reads(VideoService::find_all_by_ids(db, watch_later_ids).await?),
            subscribers: subscribers.into_iter().map(UserRead::from).collect(),
            subscriptions: subscriptions.into_iter().map(UserRead::from).collect(),
        })
    }
}

fn into_reads(videos: Vec<videos::Model>) -> Vec<VideoRead> {
    videos.into_iter().map(VideoRead::from).collect()
}
