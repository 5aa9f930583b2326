//! CLI command handlers
//!
//! One handler per subcommand, bridging clap argument parsing with the
//! service layer. Every handler unlocks the vault first: the master
//! password gates all operations, including ones that never touch
//! plaintext.

pub mod get;
pub mod list;
pub mod save;
pub mod search;
pub mod update;

pub use get::handle_get;
pub use list::handle_list;
pub use save::handle_save;
pub use search::handle_search;
pub use update::handle_update;

use crate::auth::MasterVerifier;
use crate::config::KeystashPaths;
use crate::crypto::Secret;
use crate::error::KeystashResult;
use crate::storage::CredentialRepository;

/// Unlock the vault and load the credential store
///
/// Prompts for the master password, running first-time setup when none is
/// set, and returns the verified secret together with the loaded store.
fn open_vault() -> KeystashResult<(Secret, CredentialRepository)> {
    let paths = KeystashPaths::new()?;
    paths.ensure_directories()?;

    let verifier = MasterVerifier::new(&paths);
    let secret = verifier.unlock()?;

    let store = CredentialRepository::new(paths.credentials_file());
    store.load()?;

    Ok((secret, store))
}
