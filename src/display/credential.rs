//! Credential display formatting
//!
//! Formats credential listings, search results, and name suggestions for
//! terminal output. Everything here builds strings; nothing prints.

use chrono::Duration;

use crate::models::CredentialEntry;
use crate::search::Match;

/// Heavy rule used to frame listings and reveals
pub const FRAME: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

const SEARCH_RESULT_LIMIT: usize = 10;
const SUGGESTION_LIMIT: usize = 3;

/// Format the full credential listing with saved/updated timestamps
pub fn format_credential_list(entries: &[CredentialEntry]) -> String {
    if entries.is_empty() {
        return format_empty_vault();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "\nStored credentials ({} total):\n",
        entries.len()
    ));
    output.push_str(FRAME);
    output.push('\n');

    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "{:2}. {:<30} (saved: {})\n",
            i + 1,
            entry.name,
            entry.created_at.format("%Y-%m-%d %H:%M")
        ));

        // Touches within the same minute are noise, not updates
        if entry.updated_at > entry.created_at + Duration::minutes(1) {
            output.push_str(&format!(
                "    {:<30} (updated: {})\n",
                "",
                entry.updated_at.format("%Y-%m-%d %H:%M")
            ));
        }
    }

    output.push_str(FRAME);
    output.push('\n');
    output.push_str("\nUse 'keystash get <name>' to retrieve a password\n");
    output
}

/// Format ranked search results, capped with an overflow note
pub fn format_search_results(query: &str, results: &[Match]) -> String {
    if results.is_empty() {
        return format!(
            "No matches found for '{}'.\nUse 'keystash list' to see all stored credentials.\n",
            query
        );
    }

    let mut output = String::new();
    output.push_str(&format!(
        "\nSearch results for '{}' ({} matches):\n",
        query,
        results.len()
    ));
    output.push_str(FRAME);
    output.push('\n');

    for (i, result) in results.iter().take(SEARCH_RESULT_LIMIT).enumerate() {
        output.push_str(&format!("{:2}. {}\n", i + 1, result.name));
    }
    if results.len() > SEARCH_RESULT_LIMIT {
        output.push_str(&format!(
            "    ... and {} more matches\n",
            results.len() - SEARCH_RESULT_LIMIT
        ));
    }

    output.push_str(FRAME);
    output.push('\n');
    output.push_str("\nUse 'keystash get <name>' to retrieve a password\n");
    output
}

/// Format the did-you-mean block shown when a name cannot be resolved
pub fn format_suggestions(query: &str, suggestions: &[Match]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "No exact match found for '{}'. Did you mean:\n",
        query
    ));
    for suggestion in suggestions.iter().take(SUGGESTION_LIMIT) {
        output.push_str(&format!("  • {}\n", suggestion.name));
    }
    output.push_str("Use the exact name or run 'keystash list' to see all stored credentials.\n");
    output
}

/// Message for a vault with nothing in it yet
pub fn format_empty_vault() -> String {
    "No passwords stored yet.\nUse 'keystash save <name>' to add your first password.\n"
        .to_string()
}
