//! Storage layer for H.E.A.L. Journal
//!
//! Each record is its own JSON file under the data directory, written with
//! an atomic replace. Access control is not enforced here.

pub mod entries;
pub mod file_io;
pub mod lists;

pub use entries::EntryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use lists::ListRepository;

use crate::config::JournalPaths;
use crate::error::JournalError;
use crate::models::{DailyAction, Manifestation};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: JournalPaths,
    pub entries: EntryRepository,
    pub manifestations: ListRepository<Manifestation>,
    pub daily_actions: ListRepository<DailyAction>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: JournalPaths) -> Result<Self, JournalError> {
        paths.ensure_directories()?;

        Ok(Self {
            entries: EntryRepository::new(paths.entries_file()),
            manifestations: ListRepository::new(paths.manifestations_file()),
            daily_actions: ListRepository::new(paths.daily_actions_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &JournalPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewEntry, ThreadColor};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = JournalPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(storage.paths().data_dir().exists());
        assert!(storage.entries.get_all().is_empty());
        assert!(storage.manifestations.get_all().is_empty());
    }

    #[test]
    fn test_records_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = JournalPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .entries
            .save_entry(NewEntry::new("Thread", ThreadColor::Blue, 1, "text"))
            .unwrap();
        storage.manifestations.push(Manifestation::new("peace")).unwrap();

        storage.entries.clear_all().unwrap();
        assert!(storage.entries.get_all().is_empty());
        assert_eq!(storage.manifestations.get_all().len(), 1);
        assert!(storage.daily_actions.get_all().is_empty());
    }
}
