//! keystash - a secure CLI password manager
//!
//! This library provides the core functionality for the keystash password
//! manager. Credentials are encrypted with AES-256-GCM under a key derived
//! from a master password; the master password itself is never persisted,
//! only proven against an encrypted verification record.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the vault's data directory
//! - `error`: Custom error types
//! - `crypto`: Key derivation and envelope encryption
//! - `auth`: Master password verification and hidden prompts
//! - `search`: Fuzzy name resolution
//! - `models`: The credential entry model
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Terminal output formatting and the timed reveal
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use keystash::config::KeystashPaths;
//! use keystash::storage::CredentialRepository;
//!
//! let paths = KeystashPaths::new()?;
//! let store = CredentialRepository::new(paths.credentials_file());
//! store.load()?;
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod search;
pub mod services;
pub mod storage;

pub use error::{KeystashError, KeystashResult};
