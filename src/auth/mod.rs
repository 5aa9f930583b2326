//! Master password handling for keystash
//!
//! Covers the verification record that gates the vault and the hidden
//! terminal prompts that collect passwords.

pub mod master;
pub mod prompt;

pub use master::{MasterVerifier, VaultState};
