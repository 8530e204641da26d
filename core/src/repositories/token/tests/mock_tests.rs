//! Unit tests for the mock token repository implementation

use crate::domain::entities::token::TokenRecord;
use crate::repositories::token::{MockTokenRepository, TokenRepository};

#[tokio::test]
async fn test_insert_and_find_by_jti() {
    let repo = MockTokenRepository::new();
    let record = TokenRecord::new("t1", "alice");

    let saved = repo.insert(record.clone()).await.unwrap();
    assert_eq!(saved.jti, "t1");

    let found = repo.find_by_jti("t1").await.unwrap();
    assert!(found.is_some());

    let found = found.unwrap();
    assert_eq!(found.jti, "t1");
    assert_eq!(found.identity, "alice");
    assert!(!found.revoked);
}

#[tokio::test]
async fn test_insert_duplicate_jti_fails() {
    let repo = MockTokenRepository::new();

    repo.insert(TokenRecord::new("t1", "alice")).await.unwrap();

    let result = repo.insert(TokenRecord::new("t1", "bob")).await;
    assert!(matches!(
        result,
        Err(crate::errors::StoreError::DuplicateJti { .. })
    ));

    // First write wins; the record is untouched
    let found = repo.find_by_jti("t1").await.unwrap().unwrap();
    assert_eq!(found.identity, "alice");
    assert!(!found.revoked);
}

#[tokio::test]
async fn test_find_by_jti_unknown() {
    let repo = MockTokenRepository::new();

    let found = repo.find_by_jti("missing").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_by_identity() {
    let repo = MockTokenRepository::new();

    repo.insert(TokenRecord::new("t1", "alice")).await.unwrap();
    repo.insert(TokenRecord::new("t2", "alice")).await.unwrap();
    repo.insert(TokenRecord::new("t3", "bob")).await.unwrap();

    let alice_tokens = repo.find_by_identity("alice").await.unwrap();
    assert_eq!(alice_tokens.len(), 2);

    let carol_tokens = repo.find_by_identity("carol").await.unwrap();
    assert!(carol_tokens.is_empty());
}

#[tokio::test]
async fn test_mark_revoked() {
    let repo = MockTokenRepository::new();

    repo.insert(TokenRecord::new("t1", "alice")).await.unwrap();

    let revoked = repo.mark_revoked("t1").await.unwrap();
    assert!(revoked);

    let found = repo.find_by_jti("t1").await.unwrap().unwrap();
    assert!(found.revoked);
}

#[tokio::test]
async fn test_mark_revoked_unknown_jti() {
    let repo = MockTokenRepository::new();

    let revoked = repo.mark_revoked("missing").await.unwrap();
    assert!(!revoked);
}

#[tokio::test]
async fn test_mark_revoked_already_revoked() {
    let repo = MockTokenRepository::new();

    repo.insert(TokenRecord::new("t1", "alice")).await.unwrap();
    repo.mark_revoked("t1").await.unwrap();

    // Record still exists, so the second call reports it found
    let revoked = repo.mark_revoked("t1").await.unwrap();
    assert!(revoked);
}

#[tokio::test]
async fn test_mark_all_revoked() {
    let repo = MockTokenRepository::new();

    repo.insert(TokenRecord::new("t1", "alice")).await.unwrap();
    repo.insert(TokenRecord::new("t2", "alice")).await.unwrap();
    repo.insert(TokenRecord::new("t3", "bob")).await.unwrap();

    let count = repo.mark_all_revoked("alice").await.unwrap();
    assert_eq!(count, 2);

    assert!(repo.find_by_jti("t1").await.unwrap().unwrap().revoked);
    assert!(repo.find_by_jti("t2").await.unwrap().unwrap().revoked);
    assert!(!repo.find_by_jti("t3").await.unwrap().unwrap().revoked);
}

#[tokio::test]
async fn test_mark_all_revoked_counts_already_revoked() {
    let repo = MockTokenRepository::new();

    repo.insert(TokenRecord::new("t1", "alice")).await.unwrap();
    repo.insert(TokenRecord::new("t2", "alice")).await.unwrap();
    repo.mark_revoked("t1").await.unwrap();

    // Already-revoked records still count toward the blast radius
    let count = repo.mark_all_revoked("alice").await.unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_mark_all_revoked_unknown_identity() {
    let repo = MockTokenRepository::new();

    let count = repo.mark_all_revoked("nobody").await.unwrap();
    assert_eq!(count, 0);
}
