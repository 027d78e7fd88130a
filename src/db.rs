//! PostgreSQL pool construction.

use crate::config::DbSettings;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connect a pool and verify the connection once.
pub async fn connect(settings: &DbSettings) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        host = %settings.host,
        port = settings.port,
        database = %settings.database,
        max_connections = settings.max_connections,
        "connecting to postgres"
    );
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(settings.connect_options())
        .await
}
