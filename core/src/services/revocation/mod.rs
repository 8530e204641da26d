//! Revocation service module

mod store;

pub use store::RevocationStore;
