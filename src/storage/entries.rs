//! Entry repository for JSON storage
//!
//! The whole entry collection lives in `entries.json` as a top-level JSON
//! array, newest entry first. Every operation reads the record, works on the
//! full collection and writes it back in one atomic replace.

use std::path::PathBuf;

use chrono::Utc;

use crate::error::{JournalError, JournalResult};
use crate::models::{resolve, EntryId, JournalEntry, NewEntry};

use super::file_io::{read_json_lenient, remove_record, write_json_atomic};

/// Repository for journal entry persistence
pub struct EntryRepository {
    path: PathBuf,
}

impl EntryRepository {
    /// Create a new entry repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store a new entry at the front of the collection
    pub fn save_entry(&self, entry: NewEntry) -> JournalResult<JournalEntry> {
        let mut entries = self.get_all();
        let stored = JournalEntry::from_new(entry, Utc::now());

        entries.insert(0, stored.clone());
        self.write(&entries)?;

        tracing::debug!(id = %stored.id, "saved entry");
        Ok(stored)
    }

    /// All entries, newest first
    ///
    /// A missing or unreadable record reads as an empty collection.
    pub fn get_all(&self) -> Vec<JournalEntry> {
        read_json_lenient(&self.path)
    }

    /// Get an entry by ID
    pub fn get(&self, id: &EntryId) -> Option<JournalEntry> {
        self.get_all().into_iter().find(|e| e.id == *id)
    }

    /// Find an entry by full ID, short ID or unique prefix
    ///
    /// A prefix shared by several entries is an `Ambiguous` error.
    pub fn find(&self, identifier: &str) -> JournalResult<Option<JournalEntry>> {
        let mut entries = self.get_all();
        let found = resolve(entries.iter().map(|e| &e.id), identifier, "Entry")?;
        Ok(found.map(|pos| entries.swap_remove(pos)))
    }

    /// Overwrite a stored entry in place, keeping its position
    pub fn replace(&self, entry: JournalEntry) -> JournalResult<()> {
        let mut entries = self.get_all();
        let slot = entries
            .iter_mut()
            .find(|e| e.id == entry.id)
            .ok_or_else(|| JournalError::entry_not_found(entry.id.to_string()))?;

        *slot = entry;
        self.write(&entries)
    }

    /// Delete an entry; returns false when no entry had that ID
    pub fn delete(&self, id: &EntryId) -> JournalResult<bool> {
        let mut entries = self.get_all();
        let before = entries.len();
        entries.retain(|e| e.id != *id);

        if entries.len() == before {
            return Ok(false);
        }

        self.write(&entries)?;
        Ok(true)
    }

    /// Serialize the whole collection as pretty-printed JSON
    pub fn export_data(&self) -> JournalResult<String> {
        serde_json::to_string_pretty(&self.get_all())
            .map_err(|e| JournalError::Export(format!("Failed to serialize entries: {}", e)))
    }

    /// Replace the collection with the entries in `json`
    ///
    /// Returns `Ok(false)` and leaves the stored collection untouched when the
    /// text is not a JSON array of entries. No merge, no de-duplication.
    pub fn import_data(&self, json: &str) -> JournalResult<bool> {
        let value: serde_json::Value = match serde_json::from_str(json) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "import rejected: not valid JSON");
                return Ok(false);
            }
        };

        if !value.is_array() {
            tracing::warn!("import rejected: top-level value is not an array");
            return Ok(false);
        }

        let entries: Vec<JournalEntry> = match serde_json::from_value(value) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "import rejected: invalid entry");
                return Ok(false);
            }
        };

        self.write(&entries)?;
        tracing::info!(count = entries.len(), "imported entries");
        Ok(true)
    }

    /// Delete the collection record entirely
    pub fn clear_all(&self) -> JournalResult<()> {
        remove_record(&self.path)
    }

    /// Count entries
    pub fn count(&self) -> usize {
        self.get_all().len()
    }

    fn write(&self, entries: &[JournalEntry]) -> JournalResult<()> {
        write_json_atomic(&self.path, &entries)
    }
}
