//! Token record entity tracked by the revocation store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One issued token, keyed by its `jti` claim
///
/// Records are created at issuance time and never deleted by normal
/// operation; the only state transition is `revoked` flipping from `false`
/// to `true`. A jti with no record at all is treated as revoked by the
/// lookup path, so pruning old rows out-of-band is safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Unique token identifier (`jti` claim); primary key
    pub jti: String,

    /// Subject the token was issued to; many records may share an identity
    pub identity: String,

    /// Whether the token has been revoked
    pub revoked: bool,

    /// Timestamp when the token was registered
    pub issued_at: DateTime<Utc>,
}

impl TokenRecord {
    /// Creates a new, unrevoked record for a freshly issued token
    ///
    /// # Arguments
    ///
    /// * `jti` - The token's unique identifier
    /// * `identity` - The subject the token was issued to
    pub fn new(jti: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            jti: jti.into(),
            identity: identity.into(),
            revoked: false,
            issued_at: Utc::now(),
        }
    }

    /// Marks the token as revoked
    ///
    /// Revocation is monotonic: calling this on an already-revoked record
    /// is a no-op.
    pub fn revoke(&mut self) {
        self.revoked = true;
    }

    /// Checks whether the token is still valid for authentication
    ///
    /// # Returns
    ///
    /// `true` if the record exists and has not been revoked
    pub fn is_active(&self) -> bool {
        !self.revoked
    }
}
