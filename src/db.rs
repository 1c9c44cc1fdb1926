// connexion BD + création des tables

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema,
};

use crate::config::AppConfig;
use crate::models::{comments, likes, subscriptions, users, videos, watch_later};

pub async fn establish_connection(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.sqlx_logging(false);

    Database::connect(options).await
}

/// Crée les tables manquantes à partir des entités SeaORM.
/// L'ordre compte: les tables référencées par une clé étrangère d'abord.
pub async fn create_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    create_table(db, users::Entity).await?;
    create_table(db, videos::Entity).await?;
    create_table(db, comments::Entity).await?;
    create_table(db, likes::Entity).await?;
    create_table(db, watch_later::Entity).await?;
    create_table(db, subscriptions::Entity).await?;
    Ok(())
}

async fn create_table<C, E>(db: &C, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    tracing::debug!(table = entity.table_name(), "table ready");
    Ok(())
}
