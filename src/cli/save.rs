//! Save command
//!
//! Stores a password under a new name. The name must be unused; updating an
//! existing credential goes through `keystash update`.

use crate::auth::prompt;
use crate::error::{KeystashError, KeystashResult};
use crate::services::VaultService;

use super::open_vault;

/// Handle `keystash save <name>`
pub fn handle_save(name: &str) -> KeystashResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(KeystashError::Validation(
            "Credential name cannot be empty".into(),
        ));
    }

    let (secret, store) = open_vault()?;
    let service = VaultService::new(&store, &secret);

    // Checked before the password prompt; save_new enforces it again
    if service.exists(name)? {
        return Err(KeystashError::Duplicate(name.to_string()));
    }

    let password = prompt::read_secret(&format!("Enter password for {}: ", name))?;
    service.save_new(name, &password)?;

    println!("✓ Password for '{}' saved successfully!", name);
    Ok(())
}
