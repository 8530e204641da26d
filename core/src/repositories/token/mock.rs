//! Mock implementations of TokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::TokenRecord;
use crate::errors::StoreError;

use super::r#trait::TokenRepository;

/// In-memory token repository for testing
pub struct MockTokenRepository {
    records: Arc<RwLock<HashMap<String, TokenRecord>>>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn insert(&self, record: TokenRecord) -> Result<TokenRecord, StoreError> {
        let mut records = self.records.write().await;

        if records.contains_key(&record.jti) {
            return Err(StoreError::DuplicateJti {
                jti: record.jti.clone(),
            });
        }

        records.insert(record.jti.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_jti(&self, jti: &str) -> Result<Option<TokenRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.get(jti).cloned())
    }

    async fn find_by_identity(&self, identity: &str) -> Result<Vec<TokenRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| r.identity == identity)
            .cloned()
            .collect())
    }

    async fn mark_revoked(&self, jti: &str) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;

        if let Some(record) = records.get_mut(jti) {
            record.revoke();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn mark_all_revoked(&self, identity: &str) -> Result<usize, StoreError> {
        let mut records = self.records.write().await;
        let mut count = 0;

        for record in records.values_mut() {
            if record.identity == identity {
                record.revoke();
                count += 1;
            }
        }

        Ok(count)
    }
}

/// Repository double whose every operation fails with a storage error
///
/// Backs the fail-closed tests: a lookup that cannot reach storage must
/// report the token as revoked.
pub struct FailingTokenRepository;

#[async_trait]
impl TokenRepository for FailingTokenRepository {
    async fn insert(&self, _record: TokenRecord) -> Result<TokenRecord, StoreError> {
        Err(StoreError::storage("storage unavailable"))
    }

    async fn find_by_jti(&self, _jti: &str) -> Result<Option<TokenRecord>, StoreError> {
        Err(StoreError::storage("storage unavailable"))
    }

    async fn find_by_identity(&self, _identity: &str) -> Result<Vec<TokenRecord>, StoreError> {
        Err(StoreError::storage("storage unavailable"))
    }

    async fn mark_revoked(&self, _jti: &str) -> Result<bool, StoreError> {
        Err(StoreError::storage("storage unavailable"))
    }

    async fn mark_all_revoked(&self, _identity: &str) -> Result<usize, StoreError> {
        Err(StoreError::storage("storage unavailable"))
    }
}
