//! Integration tests for SqliteUserRepository.
//!
//! Each test runs against its own in-memory SQLite database.

mod common;

use common::TestDatabase;
use rollcall_core::{NewUser, RollcallError, User, UserId};
use rollcall_repository::UserRepository;

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser::new(name, email)
}

#[tokio::test]
async fn test_save_assigns_sequential_ids() {
    let db = TestDatabase::new().await;
    let repo = db.user_repository();

    let first = repo.save(&new_user("Alice", "alice@x.com")).await.expect("save");
    let second = repo.save(&new_user("Bob", "bob@x.com")).await.expect("save");

    assert_eq!(first.id, UserId::new(1));
    assert_eq!(first.name, "Alice");
    assert_eq!(first.email, "alice@x.com");
    assert_eq!(second.id, UserId::new(2));
}

#[tokio::test]
async fn test_find_by_id() {
    let db = TestDatabase::new().await;
    let repo = db.user_repository();

    let saved = repo.save(&new_user("Alice", "alice@x.com")).await.expect("save");

    let found = repo
        .find_by_id(saved.id)
        .await
        .expect("Query failed")
        .expect("User not found");
    assert_eq!(found, saved);
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let repo = db.user_repository();

    let result = repo.find_by_id(UserId::new(999)).await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_all_empty() {
    let db = TestDatabase::new().await;
    let repo = db.user_repository();

    assert!(repo.find_all().await.expect("Query failed").is_empty());
}

#[tokio::test]
async fn test_find_all_ordered_by_id() {
    let db = TestDatabase::new().await;
    let repo = db.user_repository();

    repo.save(&new_user("Carol", "carol@x.com")).await.expect("save");
    repo.save(&new_user("Alice", "alice@x.com")).await.expect("save");
    repo.save(&new_user("Bob", "bob@x.com")).await.expect("save");

    let names: Vec<String> = repo
        .find_all()
        .await
        .expect("Query failed")
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
}

#[tokio::test]
async fn test_duplicate_name_is_conflict() {
    let db = TestDatabase::new().await;
    let repo = db.user_repository();

    repo.save(&new_user("Alice", "alice@x.com")).await.expect("save");
    let err = repo
        .save(&new_user("Alice", "other@x.com"))
        .await
        .expect_err("duplicate name should fail");

    assert!(matches!(err, RollcallError::Conflict(_)));
    assert_eq!(err.to_string(), "A user with this name already exists");
    assert_eq!(repo.count().await.expect("count"), 1);
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let db = TestDatabase::new().await;
    let repo = db.user_repository();

    repo.save(&new_user("Alice", "alice@x.com")).await.expect("save");
    let err = repo
        .save(&new_user("Alicia", "alice@x.com"))
        .await
        .expect_err("duplicate email should fail");

    assert_eq!(err.to_string(), "A user with this email already exists");
}

#[tokio::test]
async fn test_update_overwrites_fields() {
    let db = TestDatabase::new().await;
    let repo = db.user_repository();

    let mut user = repo.save(&new_user("Alice", "alice@x.com")).await.expect("save");
    user.replace_details("Alicia", "alicia@x.com");

    let updated = repo.update(&user).await.expect("update");
    assert_eq!(updated, user);

    let found = repo.find_by_id(user.id).await.expect("find").expect("exists");
    assert_eq!(found.name, "Alicia");
    assert_eq!(found.email, "alicia@x.com");
}

#[tokio::test]
async fn test_update_with_same_values_succeeds() {
    let db = TestDatabase::new().await;
    let repo = db.user_repository();

    let user = repo.save(&new_user("Alice", "alice@x.com")).await.expect("save");
    let updated = repo.update(&user).await.expect("no-op update");
    assert_eq!(updated, user);
}

#[tokio::test]
async fn test_update_into_taken_email_is_conflict() {
    let db = TestDatabase::new().await;
    let repo = db.user_repository();

    repo.save(&new_user("Alice", "alice@x.com")).await.expect("save");
    let mut bob = repo.save(&new_user("Bob", "bob@x.com")).await.expect("save");
    bob.replace_details("Bob", "alice@x.com");

    let err = repo.update(&bob).await.expect_err("taken email");
    assert!(matches!(err, RollcallError::Conflict(_)));

    let unchanged = repo.find_by_id(bob.id).await.expect("find").expect("exists");
    assert_eq!(unchanged.email, "bob@x.com");
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = db.user_repository();

    let ghost = User::new(UserId::new(42), "Ghost", "ghost@x.com");
    let err = repo.update(&ghost).await.expect_err("missing row");
    assert!(matches!(err, RollcallError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_user() {
    let db = TestDatabase::new().await;
    let repo = db.user_repository();

    let user = repo.save(&new_user("Alice", "alice@x.com")).await.expect("save");

    assert!(repo.delete(user.id).await.expect("delete"));
    assert!(repo.find_by_id(user.id).await.expect("find").is_none());
    assert!(!repo.delete(user.id).await.expect("second delete"));
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let db = TestDatabase::new().await;
    let repo = db.user_repository();

    repo.save(&new_user("Alice", "alice@x.com")).await.expect("save");
    let bob = repo.save(&new_user("Bob", "bob@x.com")).await.expect("save");
    repo.delete(bob.id).await.expect("delete");

    let carol = repo.save(&new_user("Carol", "carol@x.com")).await.expect("save");
    assert_eq!(carol.id, UserId::new(3));
}

#[tokio::test]
async fn test_deleted_name_can_be_reused() {
    let db = TestDatabase::new().await;
    let repo = db.user_repository();

    let alice = repo.save(&new_user("Alice", "alice@x.com")).await.expect("save");
    repo.delete(alice.id).await.expect("delete");

    let again = repo.save(&new_user("Alice", "alice@x.com")).await.expect("save");
    assert_ne!(again.id, alice.id);
}

#[tokio::test]
async fn test_count_users() {
    let db = TestDatabase::new().await;
    let repo = db.user_repository();

    assert_eq!(repo.count().await.expect("count"), 0);
    repo.save(&new_user("Alice", "alice@x.com")).await.expect("save");
    repo.save(&new_user("Bob", "bob@x.com")).await.expect("save");
    assert_eq!(repo.count().await.expect("count"), 2);
}
