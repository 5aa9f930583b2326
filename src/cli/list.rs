//! List command
//!
//! Prints stored credential names with their timestamps. Passwords are
//! never listed.

use crate::display;
use crate::error::KeystashResult;
use crate::services::VaultService;

use super::open_vault;

/// Handle `keystash list`
pub fn handle_list() -> KeystashResult<()> {
    let (secret, store) = open_vault()?;
    let service = VaultService::new(&store, &secret);

    let entries = service.entries()?;
    print!("{}", display::format_credential_list(&entries));

    Ok(())
}
