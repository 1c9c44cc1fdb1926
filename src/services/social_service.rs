use sea_orm::*;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::models::{subscriptions, users};
use crate::services::policy;
use crate::services::user_service::UserService;

pub struct SocialService;

impl SocialService {
    /// Abonne l'appelant à target_id. Retourne le user suivi.
    pub async fn subscribe<C: ConnectionTrait>(
        db: &C,
        caller: &AuthUser,
        target_id: i32,
    ) -> AppResult<users::Model> {
        policy::can_subscribe(caller, target_id)?;
        let target = UserService::get_by_id(db, target_id).await?;

        let key = (caller.user_id, target.id);
        if subscriptions::Entity::find_by_id(key).one(db).await?.is_some() {
            return Err(AppError::Conflict("Already subscribed".to_string()));
        }

        let edge = subscriptions::ActiveModel {
            subscriber_id: Set(caller.user_id),
            subscribed_to_id: Set(target.id),
        };
        subscriptions::Entity::insert(edge)
            .exec_without_returning(db)
            .await?;

        tracing::info!(subscriber_id = caller.user_id, subscribed_to_id = target.id, "subscribed");
        Ok(target)
    }

    pub async fn unsubscribe<C: ConnectionTrait>(
        db: &C,
        caller: &AuthUser,
        target_id: i32,
    ) -> AppResult<()> {
        let target = UserService::get_by_id(db, target_id).await?;

        let removed = subscriptions::Entity::delete_by_id((caller.user_id, target.id))
            .exec(db)
            .await?
            .rows_affected;

        if removed == 0 {
            return Err(AppError::BadRequest("You are not subscribed".to_string()));
        }

        tracing::info!(subscriber_id = caller.user_id, subscribed_to_id = target.id, "unsubscribed");
        Ok(())
    }

    /// Abonnés d'un user existant (NotFound sinon)
    pub async fn list_subscribers<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
    ) -> AppResult<Vec<users::Model>> {
        let user = UserService::get_by_id(db, user_id).await?;
        Ok(Self::subscribers_of(db, user.id).await?)
    }

    /// Users abonnés à user_id
    pub async fn subscribers_of<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
    ) -> Result<Vec<users::Model>, DbErr> {
        let ids: Vec<i32> = subscriptions::Entity::find()
            .filter(subscriptions::Column::SubscribedToId.eq(user_id))
            .all(db)
            .await?
            .into_iter()
            .map(|edge| edge.subscriber_id)
            .collect();

        UserService::find_all_by_ids(db, ids).await
    }

    /// Users auxquels user_id est abonné
    pub async fn subscriptions_of<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
    ) -> Result<Vec<users::Model>, DbErr> {
        let ids: Vec<i32> = subscriptions::Entity::find()
            .filter(subscriptions::Column::SubscriberId.eq(user_id))
            .all(db)
            .await?
            .into_iter()
            .map(|edge| edge.subscribed_to_id)
            .collect();

        UserService::find_all_by_ids(db, ids).await
    }
}
