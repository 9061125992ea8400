//! SQLite user repository implementation.

use crate::{traits::UserRepository, DatabasePoolInterface};
use async_trait::async_trait;
use rollcall_core::{NewUser, RollcallError, RollcallResult, User, UserId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite user repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = UserRepository)]
pub struct SqliteUserRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteUserRepository {
    /// Creates a new SQLite user repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::new(row.id), row.name, row.email)
    }
}

/// Maps a unique violation on `user_model` to a conflict naming the column.
fn map_write_error(err: sqlx::Error) -> RollcallError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let message = db_err.message();
            let field = if message.contains("user_model.email") {
                "email"
            } else if message.contains("user_model.name") {
                "name"
            } else {
                return RollcallError::conflict(message.to_string());
            };
            return RollcallError::conflict(format!("A user with this {} already exists", field));
        }
    }
    err.into()
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_all(&self) -> RollcallResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email FROM user_model ORDER BY id ASC",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> RollcallResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email FROM user_model WHERE id = ?",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn save(&self, user: &NewUser) -> RollcallResult<User> {
        debug!("Saving user: {}", user.name);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO user_model (name, email)
            VALUES (?, ?)
            RETURNING id, name, email
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .fetch_one(self.pool.inner())
        .await
        .map_err(map_write_error)?;

        Ok(row.into())
    }

    async fn update(&self, user: &User) -> RollcallResult<User> {
        debug!("Updating user: {}", user.id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE user_model
            SET name = ?, email = ?
            WHERE id = ?
            RETURNING id, name, email
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.id.into_inner())
        .fetch_optional(self.pool.inner())
        .await
        .map_err(map_write_error)?;

        row.map(User::from)
            .ok_or_else(|| RollcallError::not_found("User", user.id))
    }

    async fn delete(&self, id: UserId) -> RollcallResult<bool> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM user_model WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> RollcallResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_model")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
