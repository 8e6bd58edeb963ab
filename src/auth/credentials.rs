//! Credential record and its store
//!
//! The credential record is the only place the password and recovery answer
//! leave a trace, and only as salted digests.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::crypto::HashParams;
use crate::error::JournalResult;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Stored credential configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    pub password_hash: String,
    pub recovery_question: String,
    pub recovery_answer_hash: String,
    /// Generated once at setup, never rotated
    pub salt: String,
    /// Cost parameters the hashes were computed with
    #[serde(default)]
    pub params: HashParams,
}

/// Persists the credential record
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the record; `None` before first setup
    ///
    /// A corrupt record is an error: treating it as absent would let anyone
    /// run setup again over the user's journal.
    pub fn load(&self) -> JournalResult<Option<CredentialRecord>> {
        read_json(&self.path)
    }

    pub fn save(&self, record: &CredentialRecord) -> JournalResult<()> {
        write_json_atomic(&self.path, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record() -> CredentialRecord {
        CredentialRecord {
            password_hash: "aGFzaA==".into(),
            recovery_question: "City of birth?".into(),
            recovery_answer_hash: "YW5zd2Vy".into(),
            salt: "c2FsdHNhbHQ".into(),
            params: HashParams::default(),
        }
    }

    #[test]
    fn test_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::new(temp_dir.path().join("credentials.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::new(temp_dir.path().join("credentials.json"));
        store.save(&record()).unwrap();
        assert_eq!(store.load().unwrap(), Some(record()));
    }

    #[test]
    fn test_corrupt_record_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("credentials.json");
        std::fs::write(&path, "garbage").unwrap();
        assert!(CredentialStore::new(path).load().is_err());
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(record()).unwrap();
        assert!(json.get("passwordHash").is_some());
        assert!(json.get("recoveryAnswerHash").is_some());
    }
}
