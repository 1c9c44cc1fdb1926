// Likes et liste "regarder plus tard": deux ensembles d'arêtes (user_id, video_id)
// manipulés par toggle. Pas de verrou: deux toggles concurrents sur la même
// paire peuvent se croiser, la clé primaire composite empêche seulement le doublon.

use sea_orm::*;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::models::{likes, users, watch_later};
use crate::services::user_service::UserService;
use crate::services::video_service::VideoService;

pub struct EngagementService;

impl EngagementService {
    /// Like si absent, unlike si présent. Retourne l'état final (true = liké).
    pub async fn toggle_like<C: ConnectionTrait>(
        db: &C,
        caller: &AuthUser,
        video_id: i32,
    ) -> AppResult<bool> {
        let video = VideoService::get_by_id(db, video_id).await?;
        let key = (caller.user_id, video.id);

        let liked = match likes::Entity::find_by_id(key).one(db).await? {
            Some(_) => {
                likes::Entity::delete_by_id(key).exec(db).await?;
                false
            }
            None => {
                let edge = likes::ActiveModel {
                    user_id: Set(caller.user_id),
                    video_id: Set(video.id),
                };
                likes::Entity::insert(edge).exec_without_returning(db).await?;
                true
            }
        };

        tracing::info!(user_id = caller.user_id, video_id, liked, "like toggled");
        Ok(liked)
    }

    /// Ajoute ou retire la vidéo de la liste. Retourne true si la vidéo y est maintenant.
    pub async fn toggle_watch_later<C: ConnectionTrait>(
        db: &C,
        caller: &AuthUser,
        video_id: i32,
    ) -> AppResult<bool> {
        let video = VideoService::get_by_id(db, video_id).await?;
        let key = (caller.user_id, video.id);

        let saved = match watch_later::Entity::find_by_id(key).one(db).await? {
            Some(_) => {
                watch_later::Entity::delete_by_id(key).exec(db).await?;
                false
            }
            None => {
                let edge = watch_later::ActiveModel {
                    user_id: Set(caller.user_id),
                    video_id: Set(video.id),
                };
                watch_later::Entity::insert(edge)
                    .exec_without_returning(db)
                    .await?;
                true
            }
        };

        tracing::info!(user_id = caller.user_id, video_id, saved, "watch later toggled");
        Ok(saved)
    }

    pub async fn liked_by<C: ConnectionTrait>(
        db: &C,
        video_id: i32,
    ) -> Result<Vec<users::Model>, DbErr> {
        let user_ids = likes::Entity::find()
            .filter(likes::Column::VideoId.eq(video_id))
            .all(db)
            .await?
            .into_iter()
            .map(|edge| edge.user_id)
            .collect();

        UserService::find_all_by_ids(db, user_ids).await
    }

    pub async fn watch_later_by<C: ConnectionTrait>(
        db: &C,
        video_id: i32,
    ) -> Result<Vec<users::Model>, DbErr> {
        let user_ids = watch_later::Entity::find()
            .filter(watch_later::Column::VideoId.eq(video_id))
            .all(db)
            .await?
            .into_iter()
            .map(|edge| edge.user_id)
            .collect();

        UserService::find_all_by_ids(db, user_ids).await
    }
}
