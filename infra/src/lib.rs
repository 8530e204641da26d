//! # Infrastructure Layer
//!
//! Concrete persistence for the JWT Persistency revocation store:
//! a SQLx MySQL connection pool and the MySQL implementation of the
//! `TokenRepository` trait defined in `jwtp_core`.
//!
//! The store only requires durable keyed storage with a primary index on
//! `jti` and a secondary index on `identity`; MySQL is one backend, not a
//! mandate. Swapping engines means implementing `TokenRepository` against
//! another pool and leaving the core untouched.

use thiserror::Error;

// Re-export core types for convenience
pub use jwtp_core::errors::StoreError;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Errors raised while wiring up infrastructure (pools, configuration)
///
/// Once a repository is constructed, its operations speak the core
/// `StoreError` taxonomy; this type covers the bootstrap phase only.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
