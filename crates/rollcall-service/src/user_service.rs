//! User service trait definition.

use crate::dto::{UserRequest, UserResponse};
use async_trait::async_trait;
use rollcall_core::{Interface, RollcallResult, UserId};

/// User service trait.
///
/// Every operation that takes a [`UserRequest`] validates it before touching
/// storage.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Lists all users, ordered by id.
    async fn list_users(&self) -> RollcallResult<Vec<UserResponse>>;

    /// Creates a user and returns the full list afterwards.
    async fn create_user(&self, request: UserRequest) -> RollcallResult<Vec<UserResponse>>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> RollcallResult<UserResponse>;

    /// Replaces both name and email of an existing user.
    async fn update_user(&self, id: UserId, request: UserRequest) -> RollcallResult<UserResponse>;

    /// Deletes a user and returns the remaining list.
    ///
    /// The request must still carry a valid name and email.
    async fn delete_user(&self, id: UserId, request: UserRequest)
        -> RollcallResult<Vec<UserResponse>>;
}
