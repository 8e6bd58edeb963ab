//! Backup restoration for H.E.A.L. Journal
//!
//! Restoring replaces the entry collection through the same import path as
//! a manual JSON import, so a malformed backup changes nothing.

use std::fs;
use std::path::Path;

use crate::config::paths::JournalPaths;
use crate::error::{JournalError, JournalResult};
use crate::models::JournalEntry;
use crate::storage::EntryRepository;

/// Handles restoring from backups
pub struct RestoreManager {
    entries: EntryRepository,
}

impl RestoreManager {
    /// Create a new RestoreManager
    pub fn new(paths: &JournalPaths) -> Self {
        Self {
            entries: EntryRepository::new(paths.entries_file()),
        }
    }

    /// Replace all entries with the contents of a backup file
    ///
    /// It's recommended to create a backup before restoring.
    pub fn restore_from_file(&self, backup_path: &Path) -> JournalResult<RestoreResult> {
        let contents = fs::read_to_string(backup_path)
            .map_err(|e| JournalError::Io(format!("Failed to read backup file: {}", e)))?;

        if !self.entries.import_data(&contents)? {
            return Err(JournalError::Import(format!(
                "{} is not a journal backup",
                backup_path.display()
            )));
        }

        Ok(RestoreResult {
            entries_restored: self.entries.count(),
        })
    }

    /// Validate a backup file without restoring it
    pub fn validate_backup(&self, backup_path: &Path) -> JournalResult<ValidationResult> {
        let contents = fs::read_to_string(backup_path)
            .map_err(|e| JournalError::Io(format!("Failed to read backup file: {}", e)))?;

        Ok(match serde_json::from_str::<Vec<JournalEntry>>(&contents) {
            Ok(entries) => ValidationResult {
                is_valid: true,
                entry_count: entries.len(),
                victory_count: entries.iter().map(|e| e.victories.len()).sum(),
            },
            Err(e) => {
                tracing::debug!(error = %e, "backup failed validation");
                ValidationResult::default()
            }
        })
    }
}

/// Result of a restore operation
#[derive(Debug, Default)]
pub struct RestoreResult {
    /// Number of entries now in the journal
    pub entries_restored: usize,
}

impl RestoreResult {
    pub fn summary(&self) -> String {
        format!("Restored {} entries", self.entries_restored)
    }
}

/// Result of validating a backup
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether the file parses as an entry collection
    pub is_valid: bool,
    pub entry_count: usize,
    pub victory_count: usize,
}

impl ValidationResult {
    pub fn summary(&self) -> String {
        if self.is_valid {
            format!(
                "Valid backup: {} entries, {} victories",
                self.entry_count, self.victory_count
            )
        } else {
            "Invalid backup: not a JSON array of journal entries".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::BackupManager;
    use crate::config::settings::BackupRetention;
    use crate::models::{NewEntry, ThreadColor};
    use tempfile::TempDir;

    fn setup() -> (TempDir, JournalPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = JournalPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        (temp_dir, paths)
    }

    #[test]
    fn test_backup_and_restore() {
        let (_temp, paths) = setup();
        let repo = EntryRepository::new(paths.entries_file());
        repo.save_entry(NewEntry::new("Keep", ThreadColor::Red, 1, "original"))
            .unwrap();

        let backup_manager = BackupManager::new(&paths, BackupRetention::default());
        let backup_path = backup_manager.create_backup().unwrap();

        repo.clear_all().unwrap();
        repo.save_entry(NewEntry::new("Later", ThreadColor::Blue, 2, "changed"))
            .unwrap();

        let restore_manager = RestoreManager::new(&paths);
        let result = restore_manager.restore_from_file(&backup_path).unwrap();
        assert_eq!(result.entries_restored, 1);
        assert_eq!(repo.get_all()[0].thread_title, "Keep");
    }

    #[test]
    fn test_invalid_backup_changes_nothing() {
        let (temp, paths) = setup();
        let repo = EntryRepository::new(paths.entries_file());
        repo.save_entry(NewEntry::new("Keep", ThreadColor::Red, 1, "original"))
            .unwrap();

        let bad = temp.path().join("bad.json");
        fs::write(&bad, r#"{"not": "an array"}"#).unwrap();

        let restore_manager = RestoreManager::new(&paths);
        assert!(!restore_manager.validate_backup(&bad).unwrap().is_valid);
        assert!(matches!(
            restore_manager.restore_from_file(&bad),
            Err(JournalError::Import(_))
        ));
        assert_eq!(repo.count(), 1);
    }

    #[test]
    fn test_validate_backup_counts() {
        let (temp, paths) = setup();
        let good = temp.path().join("good.json");
        fs::write(&good, "[]").unwrap();

        let validation = RestoreManager::new(&paths).validate_backup(&good).unwrap();
        assert!(validation.is_valid);
        assert_eq!(validation.entry_count, 0);
    }
}
