//! Credential repository for JSON storage
//!
//! Manages loading and saving credential entries to credentials.json. The
//! file holds envelopes only; nothing in it is readable without the master
//! password.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::crypto::Envelope;
use crate::error::{KeystashError, KeystashResult};
use crate::models::CredentialEntry;

/// Serializable credential data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CredentialData {
    credentials: Vec<CredentialEntry>,
}

/// Repository for credential persistence
pub struct CredentialRepository {
    path: PathBuf,
    data: RwLock<HashMap<String, CredentialEntry>>,
}

impl CredentialRepository {
    /// Create a new credential repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load credentials from disk
    ///
    /// A missing file is an empty vault; a file that exists but cannot be
    /// parsed is an error, never silently replaced.
    pub fn load(&self) -> KeystashResult<()> {
        let file_data = if self.path.exists() {
            let file = File::open(&self.path).map_err(|e| {
                KeystashError::Storage(format!(
                    "Failed to open {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
            let reader = BufReader::new(file);
            serde_json::from_reader::<_, CredentialData>(reader).map_err(|e| {
                KeystashError::Storage(format!(
                    "Failed to parse {}: {}",
                    self.path.display(),
                    e
                ))
            })?
        } else {
            CredentialData::default()
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| KeystashError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for entry in file_data.credentials {
            data.insert(entry.name.clone(), entry);
        }

        Ok(())
    }

    /// Save credentials to disk atomically (write to temp, then rename)
    ///
    /// The store is either completely written or not modified at all. The
    /// file is created owner-readable only on Unix.
    pub fn save(&self) -> KeystashResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| KeystashError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut credentials: Vec<_> = data.values().cloned().collect();
        credentials.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        let file_data = CredentialData { credentials };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                KeystashError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Temp file in the same directory, required for an atomic rename
        let temp_path = self.path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| KeystashError::Storage(format!("Failed to create temp file: {}", e)))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(|e| {
                    KeystashError::Storage(format!("Failed to restrict store file: {}", e))
                })?;
        }

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &file_data)
            .map_err(|e| KeystashError::Storage(format!("Failed to serialize data: {}", e)))?;

        writer
            .flush()
            .map_err(|e| KeystashError::Storage(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| KeystashError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Try to clean up the temp file if rename fails
            let _ = fs::remove_file(&temp_path);
            KeystashError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }

    /// Insert a new credential; the name must not already be taken
    pub fn put(&self, entry: CredentialEntry) -> KeystashResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KeystashError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.contains_key(&entry.name) {
            return Err(KeystashError::Duplicate(entry.name));
        }

        data.insert(entry.name.clone(), entry);
        Ok(())
    }

    /// Get a credential by exact name
    pub fn get(&self, name: &str) -> KeystashResult<CredentialEntry> {
        let data = self
            .data
            .read()
            .map_err(|e| KeystashError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        data.get(name)
            .cloned()
            .ok_or_else(|| KeystashError::NotFound(name.to_string()))
    }

    /// Replace the envelope of an existing credential
    pub fn update(&self, name: &str, envelope: Envelope) -> KeystashResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KeystashError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.get_mut(name) {
            Some(entry) => {
                entry.touch(envelope);
                Ok(())
            }
            None => Err(KeystashError::NotFound(name.to_string())),
        }
    }

    /// Check whether a credential with this exact name exists
    pub fn contains(&self, name: &str) -> KeystashResult<bool> {
        let data = self
            .data
            .read()
            .map_err(|e| KeystashError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(name))
    }

    /// Get all credentials, sorted by name
    pub fn list(&self) -> KeystashResult<Vec<CredentialEntry>> {
        let data = self
            .data
            .read()
            .map_err(|e| KeystashError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut credentials: Vec<_> = data.values().cloned().collect();
        credentials.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(credentials)
    }

    /// Get all credential names, sorted
    pub fn names(&self) -> KeystashResult<Vec<String>> {
        let data = self
            .data
            .read()
            .map_err(|e| KeystashError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut names: Vec<_> = data.keys().cloned().collect();
        names.sort_by_key(|name| name.to_lowercase());
        Ok(names)
    }

    /// Count credentials
    pub fn count(&self) -> KeystashResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| KeystashError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
