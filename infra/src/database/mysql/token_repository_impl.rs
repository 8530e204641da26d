//! MySQL implementation of the TokenRepository trait.
//!
//! Persists token revocation state in a single `tokens` table keyed by
//! `jti`, with a secondary index on `identity` so bulk revocation avoids a
//! full scan.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use jwtp_core::domain::entities::token::TokenRecord;
use jwtp_core::errors::StoreError;
use jwtp_core::repositories::TokenRepository;

/// Schema for the token revocation table
///
/// Rows are never deleted by the store itself; an external housekeeping
/// job may prune them, since an absent jti already reads as revoked.
const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS tokens (
        jti VARCHAR(120) NOT NULL PRIMARY KEY,
        identity VARCHAR(120) NOT NULL,
        revoked BOOLEAN NOT NULL DEFAULT FALSE,
        issued_at TIMESTAMP(6) NOT NULL,
        INDEX idx_tokens_identity (identity)
    )
"#;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create the `tokens` table and its identity index if missing
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::storage(format!("Failed to create tokens table: {}", e)))?;

        Ok(())
    }

    /// Convert a database row to a TokenRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<TokenRecord, StoreError> {
        Ok(TokenRecord {
            jti: row
                .try_get("jti")
                .map_err(|e| StoreError::storage(format!("Failed to get jti: {}", e)))?,
            identity: row
                .try_get("identity")
                .map_err(|e| StoreError::storage(format!("Failed to get identity: {}", e)))?,
            revoked: row
                .try_get("revoked")
                .map_err(|e| StoreError::storage(format!("Failed to get revoked: {}", e)))?,
            issued_at: row
                .try_get::<DateTime<Utc>, _>("issued_at")
                .map_err(|e| StoreError::storage(format!("Failed to get issued_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn insert(&self, record: TokenRecord) -> Result<TokenRecord, StoreError> {
        let query = r#"
            INSERT INTO tokens (jti, identity, revoked, issued_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&record.jti)
            .bind(&record.identity)
            .bind(record.revoked)
            .bind(record.issued_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                // Primary-key collision: the jti is already registered.
                // The existing row is left untouched.
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    StoreError::DuplicateJti {
                        jti: record.jti.clone(),
                    }
                }
                _ => StoreError::storage(format!("Failed to insert token: {}", e)),
            })?;

        Ok(record)
    }

    async fn find_by_jti(&self, jti: &str) -> Result<Option<TokenRecord>, StoreError> {
        let query = r#"
            SELECT jti, identity, revoked, issued_at
            FROM tokens
            WHERE jti = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(jti)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::storage(format!("Failed to find token: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_identity(&self, identity: &str) -> Result<Vec<TokenRecord>, StoreError> {
        let query = r#"
            SELECT jti, identity, revoked, issued_at
            FROM tokens
            WHERE identity = ?
            ORDER BY issued_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(identity)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::storage(format!("Failed to find identity tokens: {}", e)))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(Self::row_to_record(&row)?);
        }

        Ok(records)
    }

    async fn mark_revoked(&self, jti: &str) -> Result<bool, StoreError> {
        let query = r#"
            UPDATE tokens
            SET revoked = TRUE
            WHERE jti = ?
        "#;

        let result = sqlx::query(query)
            .bind(jti)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::storage(format!("Failed to revoke token: {}", e)))?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        // MySQL reports only changed rows; an already-revoked row affects
        // nothing, so distinguish it from a missing one.
        let exists_row = sqlx::query("SELECT EXISTS(SELECT 1 FROM tokens WHERE jti = ?) AS found")
            .bind(jti)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::storage(format!("Failed to check token existence: {}", e)))?;

        let found: i8 = exists_row
            .try_get("found")
            .map_err(|e| StoreError::storage(format!("Failed to get existence result: {}", e)))?;

        Ok(found == 1)
    }

    async fn mark_all_revoked(&self, identity: &str) -> Result<usize, StoreError> {
        // Count and update inside one transaction so the batch commits as
        // a single durable unit and the count covers already-revoked rows.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::storage(format!("Failed to begin transaction: {}", e)))?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tokens WHERE identity = ?")
            .bind(identity)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| StoreError::storage(format!("Failed to count identity tokens: {}", e)))?;

        sqlx::query("UPDATE tokens SET revoked = TRUE WHERE identity = ?")
            .bind(identity)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::storage(format!("Failed to revoke identity tokens: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| StoreError::storage(format!("Failed to commit revocation: {}", e)))?;

        Ok(count as usize)
    }
}
