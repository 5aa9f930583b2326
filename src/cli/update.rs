//! Update command
//!
//! Replaces the password stored under an existing name, resolving close
//! spellings the same way `get` does.

use crate::auth::prompt;
use crate::display;
use crate::error::{KeystashError, KeystashResult};
use crate::services::{NameMatch, VaultService};

use super::open_vault;

/// Handle `keystash update <name>`
pub fn handle_update(name: &str) -> KeystashResult<()> {
    let (secret, store) = open_vault()?;
    let service = VaultService::new(&store, &secret);

    let target = match service.resolve(name)? {
        NameMatch::Exact(target) => target,
        NameMatch::Approximate(target) => {
            println!("No exact match found for '{}'.", name);
            println!("Updating password for '{}'...", target);
            target
        }
        NameMatch::NotFound { suggestions } => {
            if !suggestions.is_empty() {
                print!("{}", display::format_suggestions(name, &suggestions));
            }
            return Err(KeystashError::NotFound(name.to_string()));
        }
    };

    let password = prompt::read_secret(&format!("Enter new password for '{}': ", target))?;
    service.update_existing(&target, &password)?;

    println!("✓ Password for '{}' updated successfully!", target);
    Ok(())
}
