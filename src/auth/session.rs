//! Session state and its store

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::JournalResult;
use crate::storage::file_io::{read_json_lenient, write_json_atomic};

/// Whether the journal is set up and whether the user is logged in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub is_initialized: bool,
    pub is_authenticated: bool,
}

/// Persists the session state
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the state; unreadable state falls back to logged out
    pub fn load(&self) -> SessionState {
        read_json_lenient(&self.path)
    }

    pub fn save(&self, state: &SessionState) -> JournalResult<()> {
        write_json_atomic(&self.path, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_logged_out() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("session.json"));
        assert_eq!(store.load(), SessionState::default());
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("session.json"));
        let state = SessionState {
            is_initialized: true,
            is_authenticated: true,
        };
        store.save(&state).unwrap();
        assert_eq!(store.load(), state);
    }
}
