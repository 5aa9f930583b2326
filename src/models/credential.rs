//! Credential model
//!
//! A credential pairs a user-chosen name with the encrypted envelope holding
//! its password. Entries never hold plaintext.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::Envelope;

/// A stored credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialEntry {
    /// User-chosen name, unique within the vault
    pub name: String,

    /// Encrypted password envelope (base64 armor)
    pub envelope: Envelope,

    /// When the credential was first saved
    pub created_at: DateTime<Utc>,

    /// When the password was last changed
    pub updated_at: DateTime<Utc>,
}

impl CredentialEntry {
    /// Create a new credential entry
    pub fn new(name: impl Into<String>, envelope: Envelope) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            envelope,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the stored envelope and bump the update timestamp
    pub fn touch(&mut self, envelope: Envelope) {
        self.envelope = envelope;
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for CredentialEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    fn test_envelope(armor: &str) -> Envelope {
        Envelope::from_armor(armor)
    }

    #[test]
    fn test_new_entry() {
        let entry = CredentialEntry::new("github", test_envelope("YXJtb3I="));

        assert_eq!(entry.name, "github");
        assert_eq!(entry.created_at, entry.updated_at);
    }

    #[test]
    fn test_touch_replaces_envelope() {
        let mut entry = CredentialEntry::new("github", test_envelope("b2xk"));

        thread::sleep(Duration::from_millis(5));
        entry.touch(test_envelope("bmV3"));

        assert_eq!(entry.envelope.as_armor(), "bmV3");
        assert!(entry.updated_at > entry.created_at);
    }

    #[test]
    fn test_display_is_the_name() {
        let entry = CredentialEntry::new("amazon", test_envelope("YXJtb3I="));
        assert_eq!(entry.to_string(), "amazon");
    }

    #[test]
    fn test_serialization() {
        let entry = CredentialEntry::new("github", test_envelope("YXJtb3I="));

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: CredentialEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.name, entry.name);
        assert_eq!(deserialized.envelope, entry.envelope);
        assert_eq!(deserialized.created_at, entry.created_at);
        assert_eq!(deserialized.updated_at, entry.updated_at);
    }
}
