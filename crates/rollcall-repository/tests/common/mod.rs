//! Common test infrastructure for database integration tests.

use rollcall_repository::{DatabasePool, DatabasePoolInterface, SqliteUserRepository};
use std::sync::Arc;

/// Test database wrapper.
///
/// Each instance owns a private in-memory SQLite database with the schema
/// applied, so tests never share state.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh, migrated database.
    pub async fn new() -> Self {
        let pool = DatabasePool::in_memory()
            .await
            .expect("Failed to open in-memory database");

        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Returns a repository backed by this database.
    pub fn user_repository(&self) -> SqliteUserRepository {
        let pool: Arc<dyn DatabasePoolInterface> = self.pool();
        SqliteUserRepository::new(pool)
    }
}
