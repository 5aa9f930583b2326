//! Search command
//!
//! Fuzzy search over stored credential names.

use crate::display;
use crate::error::KeystashResult;
use crate::services::VaultService;

use super::open_vault;

/// Handle `keystash search <query>`
pub fn handle_search(query: &str) -> KeystashResult<()> {
    let (secret, store) = open_vault()?;
    let service = VaultService::new(&store, &secret);

    if service.is_empty()? {
        print!("{}", display::format_empty_vault());
        return Ok(());
    }

    let results = service.search_names(query)?;
    print!("{}", display::format_search_results(query, &results));

    Ok(())
}
