use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind, RuntimeEnv};
use crate::error::AppError;

/// Get database engine name for logging
fn db_engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Connect to the configured database.
/// This function does NOT run any migrations
pub async fn connect_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(env, kind)?;

    let mut opts = ConnectOptions::new(database_url);
    opts.connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    // Every in-memory connection is its own database, so pin the pool to one.
    if kind == DbKind::SqliteMemory {
        opts.max_connections(1).min_connections(1);
    } else {
        opts.max_connections(10);
    }

    let conn = Database::connect(opts).await?;
    info!(engine = db_engine(kind), ?env, "database connected");
    Ok(conn)
}

/// Connect and apply pending migrations
pub async fn bootstrap_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(env, kind).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    info!(engine = db_engine(kind), "migrations applied");
    Ok(conn)
}

/// Connect and run an explicit migration command (CLI entrypoint)
pub async fn orchestrate_migration(
    env: RuntimeEnv,
    kind: DbKind,
    command: MigrationCommand,
) -> Result<(), AppError> {
    let conn = connect_db(env, kind).await?;
    migrate(&conn, command).await?;
    Ok(())
}
