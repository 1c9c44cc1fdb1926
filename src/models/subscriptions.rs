// ============================================================================
// MODÈLE : SUBSCRIPTIONS
// ============================================================================
//
// Arête auto-référente users <-> users:
//   - subscriber_id : l'abonné
//   - subscribed_to_id : la chaîne suivie
//
// Points d'attention:
//   - Clé primaire composite: une paire ne peut exister qu'une fois
//   - Pas d'auto-abonnement (vérifié dans services::policy)
//   - Deux belongs_to vers users, donc pas d'impl Related (ambigu):
//     les requêtes filtrent directement sur les colonnes
//
// ============================================================================

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub subscriber_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub subscribed_to_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SubscriberId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Subscriber,

    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SubscribedToId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    SubscribedTo,
}

impl ActiveModelBehavior for ActiveModel {}
