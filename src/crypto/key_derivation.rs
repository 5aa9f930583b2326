//! Key derivation using PBKDF2
//!
//! Derives encryption keys from the master password using PBKDF2-HMAC-SHA256
//! with a high iteration count, so guessing the password from a stolen
//! envelope stays expensive.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

use super::Secret;

/// Size of a derived key in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// PBKDF2 iteration count. Deliberately slow on commodity hardware while
/// keeping interactive use sub-second.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// A derived encryption key
pub struct DerivedKey {
    /// The 32-byte key for AES-256
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// Derive an encryption key from the master password and a salt
///
/// Deterministic in `(secret, salt)`: the same pair always yields the same
/// key, which is what lets an envelope embed its own salt.
pub fn derive_key(secret: &Secret, salt: &[u8]) -> DerivedKey {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(secret.expose().as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    DerivedKey { key }
}
