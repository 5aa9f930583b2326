//! Configuration module for keystash
//!
//! Path resolution for the vault's data directory and files.

pub mod paths;

pub use paths::KeystashPaths;
