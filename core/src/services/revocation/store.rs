//! Revocation store service implementation

use crate::domain::entities::token::TokenRecord;
use crate::errors::StoreError;
use crate::repositories::TokenRepository;

/// Service tracking per-token revocation state
///
/// The issuance collaborator calls [`register`](Self::register) once per
/// issued token; the authentication collaborator calls
/// [`is_revoked`](Self::is_revoked) on every request; logout and security
/// actions call [`revoke`](Self::revoke) or
/// [`revoke_all`](Self::revoke_all).
///
/// The authentication collaborator should hold this store directly and
/// call `is_revoked` itself rather than wiring the check through a JWT
/// library callback hook.
///
/// # Safety invariant
/// A revoked or unknown jti never authenticates. `is_revoked` answers
/// `false` only when a record exists with `revoked = false`; an absent
/// record and a storage failure both resolve to `true` (fail-closed).
pub struct RevocationStore<R: TokenRepository> {
    repository: R,
}

impl<R: TokenRepository> RevocationStore<R> {
    /// Creates a new revocation store over the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Registers a freshly issued token
    ///
    /// Call this at issuance time, after the jti has been generated and
    /// the token signed. If this fails, issuance must be aborted rather
    /// than handing out an untracked token.
    ///
    /// # Arguments
    ///
    /// * `jti` - The token's unique identifier; must be non-empty
    /// * `identity` - The subject the token was issued to
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Record written durably; visible to subsequent lookups
    /// * `Err(StoreError::Validation)` - Empty jti
    /// * `Err(StoreError::DuplicateJti)` - jti already registered; signals
    ///   a jti-generation collision upstream
    /// * `Err(StoreError::Storage)` - The write could not be completed
    pub async fn register(&self, jti: &str, identity: &str) -> Result<(), StoreError> {
        if jti.is_empty() {
            return Err(StoreError::Validation {
                message: "jti must not be empty".to_string(),
            });
        }

        self.repository
            .insert(TokenRecord::new(jti, identity))
            .await?;

        tracing::debug!(jti, identity, "token registered");
        Ok(())
    }

    /// Answers whether a token is currently revoked or unknown
    ///
    /// This is the hot path, consumed on every authenticated request.
    /// Returns `false` only when a record exists and has not been revoked.
    /// An unknown jti reports `true`, and so does a storage failure: when
    /// revocation status cannot be determined, authentication must not
    /// succeed. Storage failures are logged for operational visibility but
    /// never surfaced to the authentication decision point.
    pub async fn is_revoked(&self, jti: &str) -> bool {
        match self.repository.find_by_jti(jti).await {
            Ok(Some(record)) => record.revoked,
            Ok(None) => true,
            Err(err) => {
                tracing::warn!(
                    jti,
                    error = %err,
                    "revocation lookup failed, treating token as revoked"
                );
                true
            }
        }
    }

    /// Revokes a single token
    ///
    /// Idempotent. Revoking an unknown jti is a no-op success: the lookup
    /// path already treats it as revoked, so there is nothing to do.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Revocation committed durably (or nothing to revoke)
    /// * `Err(StoreError::Storage)` - The write could not be completed;
    ///   retry is the caller's call
    pub async fn revoke(&self, jti: &str) -> Result<(), StoreError> {
        let found = self.repository.mark_revoked(jti).await?;

        if found {
            tracing::info!(jti, "token revoked");
        } else {
            // Audit line only; an unknown jti is vacuously revoked
            tracing::debug!(jti, "revoke requested for unknown jti");
        }

        Ok(())
    }

    /// Revokes every token issued to an identity
    ///
    /// # Arguments
    ///
    /// * `identity` - The subject whose tokens are revoked
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of matching records, already-revoked ones
    ///   included, so the caller sees the full blast radius; 0 when the
    ///   identity is unknown
    /// * `Err(StoreError::Storage)` - The batch could not be committed
    pub async fn revoke_all(&self, identity: &str) -> Result<usize, StoreError> {
        let count = self.repository.mark_all_revoked(identity).await?;

        tracing::info!(identity, count, "revoked all tokens for identity");
        Ok(count)
    }
}
