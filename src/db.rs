use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::time::Duration;

use crate::config::Config;

pub type DbPool = Pool<Sqlite>;

/// Open the SQLite pool over the configured database file. Schema and
/// queries belong to the route handlers downstream; this only wires the
/// connection they share through application state.
pub async fn create_pool(config: &Config) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(&config.database_filename)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}
