//! Backup manager for H.E.A.L. Journal
//!
//! Handles rolling backups of the entry collection. Each backup file holds
//! the same JSON array as a manual export, so any backup can also be
//! imported by hand.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::paths::JournalPaths;
use crate::config::settings::BackupRetention;
use crate::error::{JournalError, JournalResult};
use crate::storage::EntryRepository;

const FILE_PREFIX: &str = "heal-journal-backup-";

/// Metadata about a backup
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Manages backup creation and retention
pub struct BackupManager {
    backup_dir: PathBuf,
    entries: EntryRepository,
    retention: BackupRetention,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: &JournalPaths, retention: BackupRetention) -> Self {
        Self {
            backup_dir: paths.backup_dir(),
            entries: EntryRepository::new(paths.entries_file()),
            retention,
        }
    }

    /// Create a backup of all entries
    ///
    /// Returns the path to the created backup file.
    pub fn create_backup(&self) -> JournalResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            JournalError::Io(format!("Failed to create backup directory: {}", e))
        })?;

        let now = Utc::now();
        let filename = format!(
            "{}{}-{:03}.json",
            FILE_PREFIX,
            now.format("%Y-%m-%d-%H%M%S"),
            now.timestamp_subsec_millis()
        );
        let backup_path = self.backup_dir.join(&filename);

        let json = self.entries.export_data()?;
        fs::write(&backup_path, json)
            .map_err(|e| JournalError::Io(format!("Failed to write backup file: {}", e)))?;

        tracing::info!(path = %backup_path.display(), "created backup");
        Ok(backup_path)
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> JournalResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| JournalError::Io(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| JournalError::Io(format!("Failed to read directory entry: {}", e)))?;

            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                if let Some(info) = parse_backup_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(backups)
    }

    /// Enforce retention policy by deleting the oldest backups
    pub fn enforce_retention(&self) -> JournalResult<Vec<PathBuf>> {
        let mut deleted = Vec::new();

        for backup in self
            .list_backups()?
            .into_iter()
            .skip(self.retention.keep_count as usize)
        {
            fs::remove_file(&backup.path)
                .map_err(|e| JournalError::Io(format!("Failed to delete old backup: {}", e)))?;
            deleted.push(backup.path);
        }

        if !deleted.is_empty() {
            tracing::debug!(count = deleted.len(), "pruned old backups");
        }
        Ok(deleted)
    }

    /// Create a backup and then enforce retention policy
    pub fn create_backup_with_retention(&self) -> JournalResult<(PathBuf, Vec<PathBuf>)> {
        let backup_path = self.create_backup()?;
        let deleted = self.enforce_retention()?;
        Ok((backup_path, deleted))
    }

    /// Get backup directory path
    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }

    /// Get a specific backup by filename
    pub fn get_backup(&self, filename: &str) -> Option<BackupInfo> {
        let path = self.backup_dir.join(filename);
        if path.exists() {
            parse_backup_info(&path)
        } else {
            None
        }
    }

    /// Get the most recent backup
    pub fn get_latest_backup(&self) -> JournalResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }
}

fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();
    let stamp = filename.strip_prefix(FILE_PREFIX)?.strip_suffix(".json")?;
    let created_at = parse_backup_timestamp(stamp)?;
    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes,
    })
}

/// Parse `YYYY-MM-DD`, `YYYY-MM-DD-HHMMSS` or `YYYY-MM-DD-HHMMSS-mmm`
///
/// A bare date is what a manual export is named; it sorts as midnight.
fn parse_backup_timestamp(stamp: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(stamp.get(0..10)?, "%Y-%m-%d").ok()?;
    let rest = &stamp[10..];
    if !rest.is_empty() && !rest.starts_with('-') {
        return None;
    }

    let parts: Vec<&str> = rest.split('-').skip(1).collect();
    let (time_part, millis) = match parts.as_slice() {
        [] => ("000000", 0),
        [time] => (*time, 0),
        [time, ms] => (*time, ms.parse().ok()?),
        _ => return None,
    };

    if time_part.len() != 6 {
        return None;
    }
    let hour: u32 = time_part[0..2].parse().ok()?;
    let minute: u32 = time_part[2..4].parse().ok()?;
    let second: u32 = time_part[4..6].parse().ok()?;

    let time = chrono::NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;
    Some(DateTime::from_naive_utc_and_offset(date.and_time(time), Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JournalEntry, NewEntry, ThreadColor};
    use chrono::{Datelike, Timelike};
    use tempfile::TempDir;

    fn create_test_manager(keep_count: u32) -> (BackupManager, JournalPaths, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = JournalPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let manager = BackupManager::new(&paths, BackupRetention { keep_count });
        (manager, paths, temp_dir)
    }

    #[test]
    fn test_create_backup_holds_entries() {
        let (manager, paths, _temp) = create_test_manager(3);
        EntryRepository::new(paths.entries_file())
            .save_entry(NewEntry::new("Thread", ThreadColor::Red, 1, "text"))
            .unwrap();

        let backup_path = manager.create_backup().unwrap();
        assert!(backup_path.exists());
        assert!(backup_path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(FILE_PREFIX));

        let contents = fs::read_to_string(&backup_path).unwrap();
        let entries: Vec<JournalEntry> = serde_json::from_str(&contents).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_list_backups() {
        let (manager, _paths, _temp) = create_test_manager(3);

        manager.create_backup().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(100));
        manager.create_backup().unwrap();

        let backups = manager.list_backups().unwrap();
        assert_eq!(backups.len(), 2);
        assert!(backups[0].created_at >= backups[1].created_at);
    }

    #[test]
    fn test_retention_policy() {
        let (manager, _paths, _temp) = create_test_manager(3);

        for _ in 0..5 {
            manager.create_backup().unwrap();
            std::thread::sleep(std::time::Duration::from_millis(50));
        }

        let deleted = manager.enforce_retention().unwrap();
        assert_eq!(deleted.len(), 2);
        assert_eq!(manager.list_backups().unwrap().len(), 3);
    }

    #[test]
    fn test_get_latest_backup() {
        let (manager, _paths, _temp) = create_test_manager(3);
        assert!(manager.get_latest_backup().unwrap().is_none());

        let path = manager.create_backup().unwrap();
        let latest = manager.get_latest_backup().unwrap().unwrap();
        assert_eq!(latest.path, path);
    }

    #[test]
    fn test_manual_export_name_is_listed() {
        let (manager, _paths, _temp) = create_test_manager(3);
        fs::write(
            manager.backup_dir().join("heal-journal-backup-2025-03-09.json"),
            "[]",
        )
        .unwrap();
        fs::write(manager.backup_dir().join("notes.json"), "[]").unwrap();

        let backups = manager.list_backups().unwrap();
        assert_eq!(backups.len(), 1);
        assert_eq!(backups[0].created_at.day(), 9);
    }

    #[test]
    fn test_parse_backup_timestamp() {
        let ts = parse_backup_timestamp("2025-11-27-143022-456").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2025, 11, 27));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (14, 30, 22));

        let ts = parse_backup_timestamp("2025-11-27").unwrap();
        assert_eq!(ts.hour(), 0);

        assert!(parse_backup_timestamp("2025-11-27-1430").is_none());
        assert!(parse_backup_timestamp("latest").is_none());
    }
}
