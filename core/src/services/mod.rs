//! Business services for the revocation store.

pub mod revocation;

pub use revocation::RevocationStore;
