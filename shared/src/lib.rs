//! Shared configuration types for the JWT Persistency store
//!
//! This crate holds the configuration surface consumed by the other
//! workspace members. The store itself has a single external knob: where
//! its durable backend lives.

pub mod config;

// Re-export commonly used items at crate root
pub use config::DatabaseConfig;
