//! Repository trait definitions.

use rollcall_core::{Interface, NewUser, RollcallResult, User, UserId};
use async_trait::async_trait;

/// User repository trait.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Returns every stored user, ordered by id ascending.
    async fn find_all(&self) -> RollcallResult<Vec<User>>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> RollcallResult<Option<User>>;

    /// Inserts a new user and returns it with its assigned id.
    ///
    /// Fails with `Conflict` when the name or email is already taken.
    async fn save(&self, user: &NewUser) -> RollcallResult<User>;

    /// Overwrites the name and email of an existing user.
    async fn update(&self, user: &User) -> RollcallResult<User>;

    /// Deletes a user by ID. Returns false when no row matched.
    async fn delete(&self, id: UserId) -> RollcallResult<bool>;

    /// Counts all users.
    async fn count(&self) -> RollcallResult<u64>;
}
