//! Storage layer for keystash
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod credentials;

pub use credentials::CredentialRepository;
