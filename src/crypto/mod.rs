//! Cryptographic core for keystash
//!
//! Provides self-contained AES-256-GCM envelopes with PBKDF2-HMAC-SHA256
//! key derivation, plus the zero-on-drop secret wrapper.

pub mod envelope;
pub mod key_derivation;
pub mod secret;

pub use envelope::{decrypt, encrypt, Envelope, NONCE_SIZE, SALT_SIZE};
pub use key_derivation::{derive_key, DerivedKey, KEY_SIZE, PBKDF2_ITERATIONS};
pub use secret::Secret;
