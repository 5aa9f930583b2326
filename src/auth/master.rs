//! Master password verification
//!
//! The vault never stores the master password or a hash of it. Setup
//! encrypts a fixed marker string under the master password and persists
//! the envelope; verification decrypts that record and compares. A wrong
//! password and a corrupted record fail identically.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::KeystashPaths;
use crate::crypto::{self, Envelope, Secret};
use crate::error::{KeystashError, KeystashResult};

use super::prompt;

/// Plaintext the verification record must decrypt to
const VERIFICATION_MARKER: &str = "keystash-verification-test";

/// Whether the vault has a master password yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultState {
    /// No verification record exists; nothing can be encrypted or revealed
    Uninitialized,
    /// A verification record exists and gates every unlock
    Initialized,
}

/// Manages the master password verification record
pub struct MasterVerifier {
    record_path: PathBuf,
}

impl MasterVerifier {
    /// Create a verifier over the configured record location
    pub fn new(paths: &KeystashPaths) -> Self {
        Self {
            record_path: paths.master_file(),
        }
    }

    /// Current vault state, read from disk
    pub fn state(&self) -> VaultState {
        if self.record_path.exists() {
            VaultState::Initialized
        } else {
            VaultState::Uninitialized
        }
    }

    /// Create the verification record from a freshly chosen master password
    ///
    /// Fails if a record already exists; there is no way to replace a
    /// master password once set.
    pub fn setup(&self, secret: &Secret) -> KeystashResult<()> {
        if self.state() == VaultState::Initialized {
            return Err(KeystashError::AlreadyInitialized);
        }

        let envelope = crypto::encrypt(secret, VERIFICATION_MARKER)?;

        if let Some(parent) = self.record_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                KeystashError::Io(format!("Failed to create data directory: {}", e))
            })?;
        }

        write_restricted(&self.record_path, envelope.as_armor()).map_err(|e| {
            KeystashError::Io(format!("Failed to write verification record: {}", e))
        })?;

        Ok(())
    }

    /// Check a master password against the verification record
    ///
    /// Every failure mode after the state check (unreadable armor, failed
    /// decryption, marker mismatch) surfaces as the same invalid-password
    /// error.
    pub fn verify(&self, secret: &Secret) -> KeystashResult<()> {
        if self.state() == VaultState::Uninitialized {
            return Err(KeystashError::NotInitialized);
        }

        let armor = fs::read_to_string(&self.record_path).map_err(|e| {
            KeystashError::Io(format!("Failed to read verification record: {}", e))
        })?;
        let envelope = Envelope::from_armor(armor.trim());

        let marker = crypto::decrypt(secret, &envelope)?;
        if marker != VERIFICATION_MARKER {
            return Err(KeystashError::InvalidSecret);
        }

        Ok(())
    }

    /// Prompt for the master password, setting it up on first use
    ///
    /// Returns the verified secret so the caller can encrypt and decrypt
    /// with it for the rest of the command.
    pub fn unlock(&self) -> KeystashResult<Secret> {
        match self.state() {
            VaultState::Uninitialized => {
                println!("Setting up master password for keystash...");
                println!("IMPORTANT: If you forget this password, your credentials cannot be recovered!");
                println!();

                let secret = prompt::read_new_secret(
                    "Enter your new master password: ",
                    "Confirm your master password: ",
                )?;
                self.setup(&secret)?;

                println!("Master password has been set up successfully!");
                println!();
                Ok(secret)
            }
            VaultState::Initialized => {
                let secret = prompt::read_secret("Enter your master password: ")?;
                self.verify(&secret)?;
                Ok(secret)
            }
        }
    }
}

/// Write the record created owner-readable only
#[cfg(unix)]
fn write_restricted(path: &Path, contents: &str) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents.as_bytes())
}

#[cfg(not(unix))]
fn write_restricted(path: &Path, contents: &str) -> std::io::Result<()> {
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_verifier() -> (TempDir, MasterVerifier) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeystashPaths::with_base_dir(temp_dir.path().to_path_buf());
        let verifier = MasterVerifier::new(&paths);
        (temp_dir, verifier)
    }

    #[test]
    fn test_setup_then_verify() {
        let (_temp_dir, verifier) = create_test_verifier();
        let secret = Secret::from("correct horse");

        assert_eq!(verifier.state(), VaultState::Uninitialized);
        verifier.setup(&secret).unwrap();
        assert_eq!(verifier.state(), VaultState::Initialized);

        // Verification does not consume or alter the record
        verifier.verify(&secret).unwrap();
        verifier.verify(&secret).unwrap();
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let (_temp_dir, verifier) = create_test_verifier();
        verifier.setup(&Secret::from("right")).unwrap();

        let err = verifier.verify(&Secret::from("wrong")).unwrap_err();
        assert!(err.is_invalid_secret());
    }

    #[test]
    fn test_setup_twice_is_rejected() {
        let (_temp_dir, verifier) = create_test_verifier();
        verifier.setup(&Secret::from("first")).unwrap();

        let err = verifier.setup(&Secret::from("second")).unwrap_err();
        assert!(matches!(err, KeystashError::AlreadyInitialized));

        // The original password still verifies
        verifier.verify(&Secret::from("first")).unwrap();
    }

    #[test]
    fn test_verify_before_setup() {
        let (_temp_dir, verifier) = create_test_verifier();

        let err = verifier.verify(&Secret::from("anything")).unwrap_err();
        assert!(matches!(err, KeystashError::NotInitialized));
    }

    #[test]
    fn test_tampered_record_is_rejected() {
        let (temp_dir, verifier) = create_test_verifier();
        let secret = Secret::from("hunter2");
        verifier.setup(&secret).unwrap();

        let record_path = temp_dir.path().join("master.envelope");
        let mut armor = fs::read_to_string(&record_path).unwrap();
        let original = armor.remove(0);
        let flipped = if original == 'B' { 'C' } else { 'B' };
        armor.insert(0, flipped);
        fs::write(&record_path, armor).unwrap();

        let err = verifier.verify(&secret).unwrap_err();
        assert!(err.is_invalid_secret());
    }

    #[test]
    fn test_record_with_wrong_marker_is_rejected() {
        let (temp_dir, verifier) = create_test_verifier();
        let secret = Secret::from("hunter2");

        // A well-formed envelope under the right password, but holding the
        // wrong plaintext, must not verify
        let forged = crypto::encrypt(&secret, "some-other-text").unwrap();
        fs::create_dir_all(temp_dir.path()).unwrap();
        fs::write(temp_dir.path().join("master.envelope"), forged.as_armor()).unwrap();

        let err = verifier.verify(&secret).unwrap_err();
        assert!(err.is_invalid_secret());
    }

    #[cfg(unix)]
    #[test]
    fn test_record_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let (temp_dir, verifier) = create_test_verifier();
        verifier.setup(&Secret::from("hunter2")).unwrap();

        let mode = fs::metadata(temp_dir.path().join("master.envelope"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
