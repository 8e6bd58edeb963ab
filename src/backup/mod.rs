//! Backup system for H.E.A.L. Journal
//!
//! - `BackupManager`: creates dated backups of the entry collection and
//!   prunes old ones
//! - `RestoreManager`: validates and restores backups
//!
//! A backup file is a JSON array of entries, identical to a manual export.
//! By default the 30 most recent backups are kept.

mod manager;
mod restore;

pub use manager::{BackupInfo, BackupManager};
pub use restore::{RestoreManager, RestoreResult, ValidationResult};
