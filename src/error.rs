//! Custom error types for H.E.A.L. Journal
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for journal operations
#[derive(Error, Debug)]
pub enum JournalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A short ID that fits more than one record
    #[error("{entity_type} id '{identifier}' is ambiguous: {matches} records match, use more characters")]
    Ambiguous {
        entity_type: &'static str,
        identifier: String,
        matches: usize,
    },

    /// A credential already exists and setup was not forced
    #[error("Journal is already initialized")]
    AlreadyInitialized,

    /// No credential has been set up yet
    #[error("Journal is not initialized. Run 'heal auth setup' first")]
    NotInitialized,

    /// The session is not authenticated
    #[error("Not logged in. Run 'heal auth login' first")]
    NotAuthenticated,

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Hashing / key derivation errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Reminder delivery errors
    #[error("Reminder error: {0}")]
    Reminder(String),
}

impl JournalError {
    /// Create a "not found" error for journal entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Entry",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for victories
    pub fn victory_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Victory",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for list items (manifestations, actions)
    pub fn item_not_found(entity_type: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an ambiguous-ID error
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for journal operations
pub type JournalResult<T> = Result<T, JournalError>;
