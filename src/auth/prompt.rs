//! Hidden password prompts
//!
//! All password input goes through rpassword so nothing echoes. Prompting
//! requires a real terminal; piped stdin fails instead of hanging.

use std::io::IsTerminal;

use zeroize::Zeroizing;

use crate::crypto::Secret;
use crate::error::{KeystashError, KeystashResult};

/// Read a password from the terminal without echoing it
///
/// Input is trimmed; an empty entry is an error, not a retry.
pub fn read_secret(prompt: &str) -> KeystashResult<Secret> {
    if !std::io::stdin().is_terminal() {
        return Err(KeystashError::Input("not running in a terminal".into()));
    }

    let raw = Zeroizing::new(
        rpassword::prompt_password(prompt)
            .map_err(|e| KeystashError::Input(format!("Failed to read password: {}", e)))?,
    );

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(KeystashError::Input("Password cannot be empty".into()));
    }

    Ok(Secret::new(trimmed))
}

/// Read a new password twice and require both entries to match
pub fn read_new_secret(prompt: &str, confirm_prompt: &str) -> KeystashResult<Secret> {
    let first = read_secret(prompt)?;
    let confirmation = read_secret(confirm_prompt)?;

    if first.expose() != confirmation.expose() {
        return Err(KeystashError::Input("Passwords do not match".into()));
    }

    Ok(first)
}
