//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod auth;
pub mod backup;
pub mod entry;
pub mod export;
pub mod lists;
pub mod remind;
pub mod victory;

pub use auth::{ensure_session, handle_auth_command, AuthCommands};
pub use backup::{handle_backup_command, BackupCommands};
pub use entry::{handle_entry_command, EntryCommands};
pub use export::{handle_export_command, handle_import_command, ExportCommands};
pub use lists::{handle_action_command, handle_manifest_command, ActionCommands, ManifestCommands};
pub use remind::{handle_remind_command, RemindCommands};
pub use victory::{handle_victory_command, VictoryCommands};
