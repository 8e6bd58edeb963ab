//! YAML export of the journal
//!
//! Same content as the JSON backup, in a form that is easier to read.

use chrono::{DateTime, Utc};
use std::io::Write;

use crate::error::{JournalError, JournalResult};
use crate::storage::Storage;

/// Export all entries to YAML
pub fn export_yaml<W: Write + ?Sized>(
    storage: &Storage,
    writer: &mut W,
    generated_at: DateTime<Utc>,
) -> JournalResult<()> {
    let entries = storage.entries.get_all();

    let header = format!(
        "# H.E.A.L. Journal Export\n\
         # Generated: {}\n\
         # Entries: {}\n\
         #\n\
         # Keep it private - it contains your personal reflections.\n\n",
        generated_at.to_rfc3339(),
        entries.len()
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| JournalError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &entries).map_err(|e| JournalError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JournalPaths;
    use crate::models::{JournalEntry, NewEntry, ThreadColor};
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export() {
        let temp_dir = TempDir::new().unwrap();
        let paths = JournalPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage
            .entries
            .save_entry(NewEntry::new("Shame", ThreadColor::Violet, 4, "Let it go"))
            .unwrap();

        let mut buffer = Vec::new();
        export_yaml(&storage, &mut buffer, Utc::now()).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# H.E.A.L. Journal Export"));
        assert!(text.contains("# Entries: 1"));
        assert!(text.contains("threadTitle: Shame"));
        assert!(text.contains("color: violet"));

        let parsed: Vec<JournalEntry> = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed, storage.entries.get_all());
    }
}
