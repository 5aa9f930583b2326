//! Custom error types for keystash
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for keystash operations
#[derive(Error, Debug)]
pub enum KeystashError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Interactive input errors (empty entry, mismatch, no terminal)
    #[error("Input error: {0}")]
    Input(String),

    /// Validation errors for credential names
    #[error("Validation error: {0}")]
    Validation(String),

    /// Encryption-side failures (cipher setup, random source)
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Any decryption failure: bad armor, truncation, tag mismatch, or a
    /// wrong master password. Deliberately one message for all of them.
    #[error("Decryption failed: invalid master password or corrupted data")]
    InvalidSecret,

    /// Verification was requested before a master password exists
    #[error("Master password has not been set up yet")]
    NotInitialized,

    /// Setup was requested when a master password already exists
    #[error("Master password is already set up")]
    AlreadyInitialized,

    /// No credential stored under the given name
    #[error("No credential found for '{0}'")]
    NotFound(String),

    /// A credential with the given name already exists
    #[error("A credential for '{0}' already exists. Use 'keystash update {0}' to change it")]
    Duplicate(String),
}

impl KeystashError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is the merged decryption/verification failure
    pub fn is_invalid_secret(&self) -> bool {
        matches!(self, Self::InvalidSecret)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for KeystashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KeystashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for keystash operations
pub type KeystashResult<T> = Result<T, KeystashError>;
