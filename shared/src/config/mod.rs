//! Configuration module
//!
//! The store treats persistence as an external collaborator, so the only
//! configuration it consumes is how to reach that collaborator:
//! - `database` - Database connection and pool configuration

pub mod database;

// Re-export commonly used types
pub use database::DatabaseConfig;
