//! Path management for keystash
//!
//! Resolves where the vault keeps its files.
//!
//! ## Path Resolution Order
//!
//! 1. `KEYSTASH_DATA_DIR` environment variable (if set)
//! 2. The per-user config directory: `~/.config/keystash` on Linux,
//!    `~/Library/Application Support/keystash` on macOS,
//!    `%APPDATA%\keystash\config` on Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::KeystashError;

/// Manages all paths used by keystash
#[derive(Debug, Clone)]
pub struct KeystashPaths {
    /// Base directory for all keystash data
    base_dir: PathBuf,
}

impl KeystashPaths {
    /// Create a new KeystashPaths instance
    ///
    /// Path resolution:
    /// 1. `KEYSTASH_DATA_DIR` env var (explicit override)
    /// 2. Per-user config directory for the current platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, KeystashError> {
        let base_dir = if let Ok(custom) = std::env::var("KEYSTASH_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create KeystashPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/keystash/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the encrypted credential store
    pub fn credentials_file(&self) -> PathBuf {
        self.base_dir.join("credentials.json")
    }

    /// Get the path to the master password verification record
    pub fn master_file(&self) -> PathBuf {
        self.base_dir.join("master.envelope")
    }

    /// Ensure the base directory exists, owner-only on Unix
    pub fn ensure_directories(&self) -> Result<(), KeystashError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KeystashError::Io(format!("Failed to create data directory: {}", e)))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.base_dir, std::fs::Permissions::from_mode(0o700))
                .map_err(|e| {
                    KeystashError::Io(format!("Failed to restrict data directory: {}", e))
                })?;
        }

        Ok(())
    }
}

/// Resolve the default data directory for the current platform
fn resolve_default_path() -> Result<PathBuf, KeystashError> {
    let dirs = ProjectDirs::from("", "", "keystash")
        .ok_or_else(|| KeystashError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().to_path_buf())
}
