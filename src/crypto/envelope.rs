//! Self-contained encrypted envelopes
//!
//! Every stored secret is one envelope: `salt || nonce || ciphertext+tag`,
//! AES-256-GCM under a key derived from the master password and the
//! envelope's own salt, armored as standard base64. Fresh salt and nonce
//! are drawn for every encryption, so no two envelopes ever share key
//! material even for identical inputs.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::error::{KeystashError, KeystashResult};

use super::{derive_key, Secret};

/// Size of the key derivation salt in bytes
pub const SALT_SIZE: usize = 16;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// An encrypted envelope in its base64 armor
///
/// Opaque outside this module: callers store it, transport it, and hand it
/// back to [`decrypt`], nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope(String);

impl Envelope {
    /// Wrap armor text read from storage
    pub fn from_armor(armor: impl Into<String>) -> Self {
        Self(armor.into())
    }

    /// Get the armor text for storage
    pub fn as_armor(&self) -> &str {
        &self.0
    }
}

/// Encrypt plaintext under the master password
///
/// Generates a random salt and nonce for each call and returns the armored
/// envelope. Fails only if the system random source or cipher setup fails.
pub fn encrypt(secret: &Secret, plaintext: &str) -> KeystashResult<Envelope> {
    // Fresh salt and nonce on every call
    let mut salt = [0u8; SALT_SIZE];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| KeystashError::Encryption(format!("Failed to generate salt: {}", e)))?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng
        .try_fill_bytes(&mut nonce_bytes)
        .map_err(|e| KeystashError::Encryption(format!("Failed to generate nonce: {}", e)))?;

    let key = derive_key(secret, &salt);
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| KeystashError::Encryption(format!("Failed to create cipher: {}", e)))?;

    let nonce = Nonce::from_slice(&nonce_bytes);
    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|e| KeystashError::Encryption(format!("Encryption failed: {}", e)))?;

    // salt || nonce || ciphertext+tag
    let mut combined = Vec::with_capacity(SALT_SIZE + NONCE_SIZE + ciphertext.len());
    combined.extend_from_slice(&salt);
    combined.extend_from_slice(&nonce_bytes);
    combined.extend_from_slice(&ciphertext);

    Ok(Envelope(STANDARD.encode(combined)))
}

/// Decrypt an envelope with the master password
///
/// Bad armor, truncation, tag mismatch, and a wrong password all surface as
/// the same [`KeystashError::InvalidSecret`]; callers cannot tell which
/// check failed. No partial plaintext is ever returned.
pub fn decrypt(secret: &Secret, envelope: &Envelope) -> KeystashResult<String> {
    let combined = STANDARD
        .decode(envelope.as_armor())
        .map_err(|_| KeystashError::InvalidSecret)?;

    if combined.len() < SALT_SIZE + NONCE_SIZE {
        return Err(KeystashError::InvalidSecret);
    }

    let (salt, rest) = combined.split_at(SALT_SIZE);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);

    // Re-derive the key from the embedded salt
    let key = derive_key(secret, salt);
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| KeystashError::Encryption(format!("Failed to create cipher: {}", e)))?;

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| KeystashError::InvalidSecret)?;

    String::from_utf8(plaintext).map_err(|_| KeystashError::InvalidSecret)
}
