use anyhow::Result;
use clap::{Parser, Subcommand};

use keystash::auth::{MasterVerifier, VaultState};
use keystash::cli::{handle_get, handle_list, handle_save, handle_search, handle_update};
use keystash::config::KeystashPaths;

#[derive(Parser)]
#[command(
    name = "keystash",
    version,
    about = "A secure CLI password manager",
    long_about = "keystash stores passwords for your applications and websites, \
                  encrypted under a single master password that is never written \
                  to disk. Retrieved passwords are shown briefly and then cleared \
                  from the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a password under a new name
    Save {
        /// Credential name, e.g. "github"
        name: String,
    },

    /// Retrieve a password (shown briefly, then cleared)
    Get {
        /// Credential name; close spellings are resolved
        name: String,
    },

    /// Update the password stored under an existing name
    Update {
        /// Credential name; close spellings are resolved
        name: String,
    },

    /// List stored credential names
    List,

    /// Search stored names with fuzzy matching
    Search {
        /// Search query
        query: String,
    },

    /// Show configuration and vault state
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Save { name }) => handle_save(&name)?,
        Some(Commands::Get { name }) => handle_get(&name)?,
        Some(Commands::Update { name }) => handle_update(&name)?,
        Some(Commands::List) => handle_list()?,
        Some(Commands::Search { query }) => handle_search(&query)?,
        Some(Commands::Config) => {
            let paths = KeystashPaths::new()?;
            let verifier = MasterVerifier::new(&paths);

            println!("keystash configuration");
            println!("======================");
            println!("Data directory:      {}", paths.base_dir().display());
            println!("Credential store:    {}", paths.credentials_file().display());
            println!("Verification record: {}", paths.master_file().display());
            println!();
            match verifier.state() {
                VaultState::Initialized => println!("Master password: set"),
                VaultState::Uninitialized => {
                    println!("Master password: not set");
                    println!("It will be set up the first time you run a vault command.");
                }
            }
        }
        None => {
            println!("keystash - a secure CLI password manager");
            println!();
            println!("Run 'keystash --help' for usage information.");
            println!("Run 'keystash save <name>' to store your first password.");
        }
    }

    Ok(())
}
