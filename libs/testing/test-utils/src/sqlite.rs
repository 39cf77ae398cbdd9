//! SQLite test infrastructure
//!
//! Every [`TestDatabase`] is a private in-memory SQLite database with the
//! workspace migrations applied, so tests can run in parallel without sharing
//! state.

use core_config::database::DatabaseConfig;
use migration::Migrator;
use sea_orm::DatabaseConnection;

/// Migrated in-memory database; dropped together with its connection.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let config = DatabaseConfig::new("sqlite::memory:");

        let connection = database::sql::connect_from_config(&config)
            .await
            .expect("Failed to open in-memory SQLite database");

        database::sql::run_migrations::<Migrator>(&connection, "test-utils")
            .await
            .expect("Failed to run migrations on test database");

        tracing::debug!("Test database ready (in-memory SQLite)");

        Self { connection }
    }

    /// Cloned handle to the underlying connection pool
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
