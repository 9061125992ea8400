//! User resource controller.

use crate::{
    extractors::UserPayload,
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::Redirect,
    routing::get,
    Json, Router,
};
use rollcall_core::{ErrorResponse, RollcallError, UserId};
use rollcall_service::{UserRequest, UserResponse};
use tracing::debug;

/// Creates the user router.
///
/// Paths are absolute: the collection lives at `/api/users/` with its
/// trailing slash and items at `/api/users/{id}`. The slash-less collection
/// path redirects to the canonical one.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/users",
            get(redirect_to_collection).post(redirect_to_collection),
        )
        .route("/api/users/", get(list_users).post(create_user))
        .route(
            "/api/users/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

/// Parses a path id. Only unsigned decimal digits name a user.
fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    let not_found = || AppError(RollcallError::not_found("User", id));
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }
    UserId::parse(id).map_err(|_| not_found())
}

/// Permanent redirect (308, method and body preserved) to `/api/users/`.
async fn redirect_to_collection(uri: Uri) -> Redirect {
    match uri.query() {
        Some(query) => Redirect::permanent(&format!("/api/users/?{}", query)),
        None => Redirect::permanent("/api/users/"),
    }
}

/// List all users.
#[utoipa::path(
    get,
    path = "/api/users/",
    tag = "users",
    responses(
        (status = 200, description = "All users ordered by id", body = [UserResponse])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    debug!("List users request");

    let users = state.user_service.list_users().await?;
    ok(users)
}

/// Create a user and return every user.
#[utoipa::path(
    post,
    path = "/api/users/",
    tag = "users",
    request_body(content = UserRequest, description = "JSON, form body or query string"),
    responses(
        (status = 201, description = "User created; full list returned", body = [UserResponse]),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 409, description = "Name or email already taken", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    UserPayload(request): UserPayload,
) -> Result<(StatusCode, Json<Vec<UserResponse>>), AppError> {
    debug!("Create user request");

    let users = state.user_service.create_user(request).await?;
    Ok(created(users))
}

/// Get a user by ID.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserResponse> {
    debug!("Get user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let user = state.user_service.get_user(user_id).await?;
    ok(user)
}

/// Replace a user's name and email.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body(content = UserRequest, description = "Both fields are required"),
    responses(
        (status = 200, description = "The updated user", body = UserResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Name or email already taken", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    UserPayload(request): UserPayload,
) -> ApiResult<UserResponse> {
    debug!("Update user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let user = state.user_service.update_user(user_id, request).await?;
    ok(user)
}

/// Delete a user and return the remaining users.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body(content = UserRequest, description = "Required but not used"),
    responses(
        (status = 200, description = "User deleted; remaining users returned", body = [UserResponse]),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    UserPayload(request): UserPayload,
) -> ApiResult<Vec<UserResponse>> {
    debug!("Delete user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let users = state.user_service.delete_user(user_id, request).await?;
    ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("12").unwrap(), UserId::new(12));
    }

    #[test]
    fn test_non_integer_id_is_not_found() {
        for raw in ["abc", "1.5", "", "99999999999999999999", "+1", "-1", " 1"] {
            let AppError(err) = parse_user_id(raw).unwrap_err();
            assert_eq!(err.to_string(), "User not found");
        }
    }
}
