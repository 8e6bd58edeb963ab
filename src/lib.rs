//! H.E.A.L. Journal - private, local-first healing journal
//!
//! A single user protects the journal with a password and a recovery
//! question, writes entries about the threads they are working through,
//! celebrates victories, and keeps manifestation and daily-action lists.
//! Everything is stored as JSON files on the local machine.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `crypto`: salted Argon2id hashing and zeroizing secret strings
//! - `auth`: credential record, session state and the auth manager
//! - `models`: entries, beliefs, victories and list items
//! - `storage`: JSON file repositories with atomic writes
//! - `services`: validation, edits, search and time-frame filtering
//! - `export`: JSON backup, printable text, YAML and CSV
//! - `backup`: rolling backups with retention and restore
//! - `reminder`: push reminder scheduler with file-backed adapters
//! - `display`, `cli`: terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use heal_journal::auth::AuthManager;
//! use heal_journal::config::JournalPaths;
//! use heal_journal::storage::Storage;
//!
//! let paths = JournalPaths::new()?;
//! let mut auth = AuthManager::open(&paths)?;
//! auth.initialize("healjourney", "City of birth?", "Denver")?;
//!
//! let storage = Storage::new(paths)?;
//! let entries = storage.entries.get_all();
//! ```

pub mod auth;
pub mod backup;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reminder;
pub mod services;
pub mod storage;

pub use error::{JournalError, JournalResult};
