//! In-memory handling of secret strings
//!
//! Provides a string wrapper that zeros its contents on drop so passwords
//! do not linger in memory after a command finishes.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secret string (master password or stored credential) that is zeroed
/// on drop and redacted from all formatted output.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Secret {
    inner: String,
}

impl Secret {
    /// Create a new Secret
    pub fn new(s: impl Into<String>) -> Self {
        Self { inner: s.into() }
    }

    /// Get the secret contents
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Get the length in bytes
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Secret {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// Don't print the contents in Debug output
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("len", &self.inner.len())
            .finish()
    }
}

// Don't print the contents in Display output
impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_creation() {
        let s = Secret::new("hunter2");
        assert_eq!(s.expose(), "hunter2");
        assert_eq!(s.len(), 7);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_secret_from_string() {
        let s: Secret = String::from("hunter2").into();
        assert_eq!(s.expose(), "hunter2");
    }

    #[test]
    fn test_secret_from_str() {
        let s: Secret = "hunter2".into();
        assert_eq!(s.expose(), "hunter2");
    }

    #[test]
    fn test_secret_debug_redacted() {
        let s = Secret::new("hunter2");
        let debug = format!("{:?}", s);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("Secret"));
    }

    #[test]
    fn test_secret_display_redacted() {
        let s = Secret::new("hunter2");
        let display = format!("{}", s);
        assert!(!display.contains("hunter2"));
        assert!(display.contains("REDACTED"));
    }
}
