use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::common::{DatabaseError, DatabaseResult};

/// Ping the database through the pool.
///
/// Used by readiness probes; works for every backend SeaORM supports.
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<()> {
    debug!("Running database health check");

    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    debug!("Database health check passed");
    Ok(())
}
