use core_config::database::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::info;

use crate::common::{RetryConfig, retry, retry_with_backoff};

/// An in-memory SQLite database lives inside a single connection, so a pool
/// must never open a second one.
fn is_in_memory_sqlite(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

/// Build SeaORM connect options from a [`DatabaseConfig`]
pub fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);

    if is_in_memory_sqlite(&config.url) {
        opt.max_connections(1).min_connections(1);
    }

    opt
}

/// Connect with default pool settings
///
/// # Example
/// ```ignore
/// let db = database::sql::connect("sqlite::memory:").await?;
/// ```
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(&DatabaseConfig::new(database_url)).await
}

/// Connect using a [`DatabaseConfig`]
pub async fn connect_from_config(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(connect_options(config)).await
}

/// Connect with caller-built options
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Connected to database");
    Ok(db)
}

/// Connect from config, retrying with exponential backoff.
///
/// Meant for service startup, where the database may come up after the app.
pub async fn connect_from_config_with_retry(
    config: &DatabaseConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let options = connect_options(config);
    let attempt = || connect_with_options(options.clone());

    match retry_config {
        Some(policy) => retry_with_backoff(attempt, policy).await,
        None => retry(attempt).await,
    }
}

/// Apply all pending migrations of `M`
///
/// # Example
/// ```ignore
/// use migration::Migrator;
///
/// database::sql::run_migrations::<Migrator>(&db, "todo_api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None).await?;
    info!(app = app_name, "Migrations completed");
    Ok(())
}

/// Close the pool, logging instead of failing: used from shutdown hooks.
pub async fn close(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => info!("Database connection pool closed"),
        Err(e) => tracing::warn!(error = %e, "Failed to close database connection pool"),
    }
}
