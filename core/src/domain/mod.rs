//! Domain entities for the revocation store.

pub mod entities;
