//pour les requêtes et réponses structurées
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::users::Role;
use super::{comments, users, videos};

// ---------- Auth ----------

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub role: Option<Role>, // viewer par défaut
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

// ---------- Users ----------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRead {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<users::Model> for UserRead {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

/// Réponse pour /users/me
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: UserRead,
    pub uploaded_videos: Vec<VideoRead>,
    pub liked_videos: Vec<VideoRead>,
    pub watch_later_videos: Vec<VideoRead>,
    pub subscribers: Vec<UserRead>,
    pub subscriptions: Vec<UserRead>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WatchLaterResponse {
    pub message: String,
    pub in_watch_later: bool,
}

// ---------- Videos ----------

#[derive(Debug, Deserialize, Validate)]
pub struct VideoCreate {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    #[validate(url)]
    pub video_url: String,
    #[validate(url)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRead {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub upload_time: DateTime<Utc>,
    pub uploader_id: i32,
}

impl From<videos::Model> for VideoRead {
    fn from(video: videos::Model) -> Self {
        Self {
            id: video.id,
            title: video.title,
            description: video.description,
            video_url: video.video_url,
            thumbnail_url: video.thumbnail_url,
            upload_time: video.upload_time,
            uploader_id: video.uploader_id,
        }
    }
}

/// Réponse pour GET /videos/{id}
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoDetail {
    #[serde(flatten)]
    pub video: VideoRead,
    pub uploader: Option<UserRead>,
    pub comments: Vec<CommentRead>,
    pub liked_by: Vec<UserRead>,
    pub watch_later_by: Vec<UserRead>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LikeResponse {
    pub message: String,
    pub liked: bool,
}

// ---------- Comments ----------

#[derive(Debug, Deserialize, Validate)]
pub struct CommentCreate {
    pub video_id: i32,
    #[validate(length(min = 1, max = 5000))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CommentUpdate {
    #[validate(length(min = 1, max = 5000))]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRead {
    pub id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i32,
    pub video_id: i32,
}

impl From<comments::Model> for CommentRead {
    fn from(comment: comments::Model) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            created_at: comment.created_at,
            user_id: comment.user_id,
            video_id: comment.video_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentStats {
    pub video_id: i32,
    pub total_comments: u64,
    pub latest_comment: Option<String>,
    pub latest_comment_time: Option<DateTime<Utc>>,
}

// ---------- Health ----------

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub time: DateTime<Utc>,
}
