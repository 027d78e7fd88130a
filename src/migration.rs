//! Embedded schema migrations (`migrations/*.sql`), applied at startup by
//! sqlx's migrator. Applied versions are checksummed and recorded in
//! `_sqlx_migrations`, so reruns are no-ops.

use crate::error::MigrationError;
use sqlx::migrate::Migrator;
use sqlx::PgPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply pending migrations.
pub async fn run(pool: &PgPool) -> Result<(), MigrationError> {
    let latest = MIGRATOR.iter().map(|m| m.version).max().unwrap_or_default();
    tracing::info!(latest, "applying migrations");
    MIGRATOR.run(pool).await?;
    tracing::info!("schema up to date");
    Ok(())
}
