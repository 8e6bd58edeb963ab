//! Path management for H.E.A.L. Journal
//!
//! Resolves where credentials, session state, entries, backups and the
//! reminder store live on disk.
//!
//! ## Path Resolution Order
//!
//! 1. `HEAL_JOURNAL_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/heal-journal` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::JournalError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "HEAL_JOURNAL_DATA_DIR";

/// Manages all paths used by the journal
#[derive(Debug, Clone)]
pub struct JournalPaths {
    /// Base directory for all journal data
    base_dir: PathBuf,
}

impl JournalPaths {
    /// Create a new JournalPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, JournalError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create JournalPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the backup directory (<base>/backups/)
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the reminder directory (<base>/reminders/)
    ///
    /// Kept apart from `data/`: the scheduler's store is multi-user and never
    /// touches the journal records.
    pub fn reminder_dir(&self) -> PathBuf {
        self.base_dir.join("reminders")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Credential record (salt, hashes, recovery question)
    pub fn credentials_file(&self) -> PathBuf {
        self.data_dir().join("credentials.json")
    }

    /// Session state record
    pub fn session_file(&self) -> PathBuf {
        self.data_dir().join("session.json")
    }

    /// Journal entry collection
    pub fn entries_file(&self) -> PathBuf {
        self.data_dir().join("entries.json")
    }

    /// Manifestation list
    pub fn manifestations_file(&self) -> PathBuf {
        self.data_dir().join("manifestations.json")
    }

    /// Daily action list
    pub fn daily_actions_file(&self) -> PathBuf {
        self.data_dir().join("daily_actions.json")
    }

    /// Reminder subscriber records
    pub fn subscribers_file(&self) -> PathBuf {
        self.reminder_dir().join("subscribers.json")
    }

    /// Append-only log of delivered push messages
    pub fn outbox_file(&self) -> PathBuf {
        self.reminder_dir().join("outbox.jsonl")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), JournalError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| JournalError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| JournalError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir())
            .map_err(|e| JournalError::Io(format!("Failed to create backup directory: {}", e)))?;

        std::fs::create_dir_all(self.reminder_dir()).map_err(|e| {
            JournalError::Io(format!("Failed to create reminder directory: {}", e))
        })?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, JournalError> {
    ProjectDirs::from("", "", "heal-journal")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| JournalError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = JournalPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.backup_dir(), temp_dir.path().join("backups"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        std::env::set_var(DATA_DIR_ENV, custom_path);
        let paths = JournalPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
        std::env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = JournalPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.backup_dir().exists());
        assert!(paths.reminder_dir().exists());
    }

    #[test]
    fn test_record_files_are_separate() {
        let temp_dir = TempDir::new().unwrap();
        let paths = JournalPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.entries_file(),
            temp_dir.path().join("data").join("entries.json")
        );
        assert_ne!(paths.credentials_file(), paths.session_file());
        assert!(paths.subscribers_file().starts_with(paths.reminder_dir()));
    }
}
