//! Timed password reveal
//!
//! Shows a decrypted password inside a frame, waits a few seconds, then
//! clears the screen so the plaintext does not linger in the terminal or
//! scrollback.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::crypto::Secret;
use crate::error::KeystashResult;

use super::credential::FRAME;

/// How long a revealed password stays on screen
pub const REVEAL_SECONDS: u64 = 5;

/// Build the framed reveal block
pub fn format_reveal(name: &str, password: &Secret) -> String {
    let mut output = String::new();
    output.push_str(&format!("\nPassword for '{}':\n", name));
    output.push_str(FRAME);
    output.push('\n');
    output.push_str(&format!("  {}\n", password.expose()));
    output.push_str(FRAME);
    output.push('\n');
    output
}

/// Show a password for [`REVEAL_SECONDS`], then clear the terminal
pub fn reveal_briefly(name: &str, password: &Secret) -> KeystashResult<()> {
    print!("{}", format_reveal(name, password));
    println!("\nPassword will be cleared in {} seconds...", REVEAL_SECONDS);
    io::stdout().flush()?;

    thread::sleep(Duration::from_secs(REVEAL_SECONDS));

    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    println!("Password cleared for security.");

    Ok(())
}
