//! User service implementation.

use crate::dto::{UserRequest, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use rollcall_core::{RollcallError, RollcallResult, UserId};
use rollcall_repository::UserRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// User service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceImpl {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    async fn all_users(&self) -> RollcallResult<Vec<UserResponse>> {
        let users = self.user_repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list_users(&self) -> RollcallResult<Vec<UserResponse>> {
        debug!("Listing users");
        self.all_users().await
    }

    async fn create_user(&self, request: UserRequest) -> RollcallResult<Vec<UserResponse>> {
        let new_user = request.into_new_user()?;
        debug!("Creating user: {}", new_user.name);

        let saved_user = self.user_repository.save(&new_user).await?;

        info!("User created: {}", saved_user.id);
        self.all_users().await
    }

    async fn get_user(&self, id: UserId) -> RollcallResult<UserResponse> {
        debug!("Getting user: {}", id);

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RollcallError::not_found("User", id))?;

        Ok(UserResponse::from(user))
    }

    async fn update_user(&self, id: UserId, request: UserRequest) -> RollcallResult<UserResponse> {
        let details = request.into_new_user()?;
        debug!("Updating user: {}", id);

        let mut user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RollcallError::not_found("User", id))?;

        user.replace_details(details.name, details.email);

        let updated_user = self.user_repository.update(&user).await?;

        info!("User updated: {}", id);
        Ok(UserResponse::from(updated_user))
    }

    async fn delete_user(
        &self,
        id: UserId,
        request: UserRequest,
    ) -> RollcallResult<Vec<UserResponse>> {
        // Fields are required but never used.
        request.into_new_user()?;
        debug!("Deleting user: {}", id);

        if !self.user_repository.delete(id).await? {
            return Err(RollcallError::not_found("User", id));
        }

        info!("User deleted: {}", id);
        self.all_users().await
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
