//! Token repository trait defining the interface for revocation-state persistence.

use async_trait::async_trait;

use crate::domain::entities::token::TokenRecord;
use crate::errors::StoreError;

/// Repository trait for TokenRecord persistence operations
///
/// This trait is the seam between the revocation service and whatever
/// durable backend holds the records. Implementations must provide
/// insert-if-absent and point lookup keyed by `jti`, plus a secondary
/// lookup keyed by `identity` so bulk revocation avoids a full scan.
///
/// # Consistency
/// Once a mutation returns `Ok`, every subsequent read through the same
/// repository must observe it. Implementations must not serve stale cached
/// state for revocation checks.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Insert a new token record
    ///
    /// # Arguments
    /// * `record` - The TokenRecord to persist
    ///
    /// # Returns
    /// * `Ok(TokenRecord)` - The saved record
    /// * `Err(StoreError::DuplicateJti)` - A record with this jti already exists
    /// * `Err(StoreError::Storage)` - The write could not be completed
    ///
    /// # Example
    /// ```no_run
    /// # use jwtp_core::repositories::TokenRepository;
    /// # use jwtp_core::domain::entities::token::TokenRecord;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let record = TokenRecord::new("550e8400-jti", "alice");
    ///
    /// let saved = repo.insert(record).await?;
    /// println!("Registered token {}", saved.jti);
    /// # Ok(())
    /// # }
    /// ```
    async fn insert(&self, record: TokenRecord) -> Result<TokenRecord, StoreError>;

    /// Find a token record by its jti
    ///
    /// This is the hot path backing every authentication request, so
    /// implementations must resolve it by primary key in O(1) expected
    /// time.
    ///
    /// # Arguments
    /// * `jti` - The token identifier to look up
    ///
    /// # Returns
    /// * `Ok(Some(TokenRecord))` - Record found
    /// * `Ok(None)` - No record with the given jti
    /// * `Err(StoreError)` - Storage error occurred
    async fn find_by_jti(&self, jti: &str) -> Result<Option<TokenRecord>, StoreError>;

    /// Find every token record issued to an identity
    ///
    /// # Arguments
    /// * `identity` - The subject to look up
    ///
    /// # Returns
    /// * `Ok(Vec<TokenRecord>)` - All records for the identity, revoked or not
    /// * `Err(StoreError)` - Storage error occurred
    async fn find_by_identity(&self, identity: &str) -> Result<Vec<TokenRecord>, StoreError>;

    /// Mark a single token as revoked
    ///
    /// The transition must be atomic at the record level: a concurrent
    /// reader observes either the old or the new state, never a
    /// half-written record.
    ///
    /// # Arguments
    /// * `jti` - The token identifier to revoke
    ///
    /// # Returns
    /// * `Ok(true)` - Record found (revoked now, or already revoked)
    /// * `Ok(false)` - No record with the given jti
    /// * `Err(StoreError)` - Storage error occurred
    async fn mark_revoked(&self, jti: &str) -> Result<bool, StoreError>;

    /// Mark every token issued to an identity as revoked
    ///
    /// Commits as a single durable unit. The count covers all matching
    /// records, including those that were already revoked, so callers see
    /// the full blast radius.
    ///
    /// # Arguments
    /// * `identity` - The subject whose tokens are revoked
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of matching records
    /// * `Err(StoreError)` - Storage error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use jwtp_core::repositories::TokenRepository;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let count = repo.mark_all_revoked("alice").await?;
    /// println!("Revoked {} tokens", count);
    /// # Ok(())
    /// # }
    /// ```
    async fn mark_all_revoked(&self, identity: &str) -> Result<usize, StoreError>;
}
