//! Get command
//!
//! Retrieves a password and shows it briefly. A close spelling of a stored
//! name is resolved automatically; an unresolvable name fails after
//! printing suggestions.

use crate::display;
use crate::error::{KeystashError, KeystashResult};
use crate::services::{NameMatch, VaultService};

use super::open_vault;

/// Handle `keystash get <name>`
pub fn handle_get(name: &str) -> KeystashResult<()> {
    let (secret, store) = open_vault()?;
    let service = VaultService::new(&store, &secret);

    let target = match service.resolve(name)? {
        NameMatch::Exact(target) => target,
        NameMatch::Approximate(target) => {
            println!("No exact match found for '{}'.", name);
            println!(
                "Did you mean '{}'? Retrieving password for '{}'...",
                target, target
            );
            target
        }
        NameMatch::NotFound { suggestions } => {
            if !suggestions.is_empty() {
                print!("{}", display::format_suggestions(name, &suggestions));
            }
            return Err(KeystashError::NotFound(name.to_string()));
        }
    };

    let password = service.reveal(&target)?;
    display::reveal_briefly(&target, &password)
}
