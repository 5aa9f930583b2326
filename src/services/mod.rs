//! Service layer for keystash
//!
//! Business logic on top of the storage layer: encryption of stored
//! passwords, name validation, and fuzzy name resolution.

pub mod vault;

pub use vault::{NameMatch, VaultService};
