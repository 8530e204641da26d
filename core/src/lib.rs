//! # JWT Persistency Core
//!
//! Domain layer for the token revocation store. This crate contains the
//! token record entity, the repository interface over durable storage,
//! the revocation service consumed by issuance and authentication
//! collaborators, and the error types shared across the workspace.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::token::TokenRecord;
pub use errors::StoreError;
pub use repositories::TokenRepository;
pub use services::RevocationStore;
