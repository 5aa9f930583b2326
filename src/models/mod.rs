//! Core data models for keystash
//!
//! The vault stores exactly one kind of record: a named credential wrapping
//! an encrypted envelope.

pub mod credential;

pub use credential::CredentialEntry;
