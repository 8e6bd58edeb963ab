//! JSON backup export and import
//!
//! A backup is the entry collection exactly as the store holds it: a
//! pretty-printed JSON array, newest entry first.

use chrono::NaiveDate;
use std::io::Write;

use crate::error::{JournalError, JournalResult};
use crate::storage::Storage;

/// Suggested file name for a backup made on `date`
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("heal-journal-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Write the JSON backup of all entries
pub fn export_json<W: Write + ?Sized>(storage: &Storage, writer: &mut W) -> JournalResult<()> {
    let json = storage.entries.export_data()?;
    writer
        .write_all(json.as_bytes())
        .map_err(|e| JournalError::Export(e.to_string()))?;
    Ok(())
}

/// Replace all entries with the contents of a JSON backup
///
/// A backup that is not an array of entries is rejected with an `Import`
/// error and nothing is changed.
pub fn import_json(storage: &Storage, json: &str) -> JournalResult<usize> {
    if !storage.entries.import_data(json)? {
        return Err(JournalError::Import(
            "Invalid backup file format: expected a JSON array of entries".into(),
        ));
    }
    Ok(storage.entries.count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JournalPaths;
    use crate::models::{NewEntry, ThreadColor};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = JournalPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_then_import_elsewhere() {
        let (_a, source) = create_test_storage();
        source
            .entries
            .save_entry(NewEntry::new("One", ThreadColor::Red, 1, "first"))
            .unwrap();
        source
            .entries
            .save_entry(NewEntry::new("Two", ThreadColor::Blue, 2, "second"))
            .unwrap();

        let mut buffer = Vec::new();
        export_json(&source, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("[\n  {"));

        let (_b, target) = create_test_storage();
        assert_eq!(import_json(&target, &text).unwrap(), 2);
        assert_eq!(target.entries.get_all(), source.entries.get_all());
    }

    #[test]
    fn test_import_rejects_object() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .entries
            .save_entry(NewEntry::new("Keep", ThreadColor::Red, 1, "me"))
            .unwrap();

        let err = import_json(&storage, r#"{"entries": []}"#).unwrap_err();
        assert!(matches!(err, JournalError::Import(_)));
        assert_eq!(storage.entries.count(), 1);
    }

    #[test]
    fn test_backup_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(backup_file_name(date), "heal-journal-backup-2025-03-09.json");
    }
}
