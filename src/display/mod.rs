//! Display formatting for terminal output
//!
//! Pure formatters for listings, search results, and suggestions, plus the
//! timed reveal that is the only place plaintext ever reaches the screen.

pub mod credential;
pub mod reveal;

pub use credential::{
    format_credential_list, format_empty_vault, format_search_results, format_suggestions,
};
pub use reveal::reveal_briefly;
