//! Journal entry model
//!
//! An entry captures one healing session: the thread being worked on, its
//! color and number, the free-text reflection, the beliefs explored and the
//! victories celebrated along the way.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::color::ThreadColor;
use super::ids::{BeliefId, EntryId, VictoryId};
use super::victory::Victory;

/// Lowest and highest session number
pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 6;

/// A limiting belief and how it is a lie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Belief {
    pub id: BeliefId,
    pub belief: String,
    pub how_is_it_a_lie: String,
}

impl Belief {
    pub fn new(belief: impl Into<String>, how_is_it_a_lie: impl Into<String>) -> Self {
        Self {
            id: BeliefId::new(),
            belief: belief.into(),
            how_is_it_a_lie: how_is_it_a_lie.into(),
        }
    }
}

/// Entry content supplied by the caller; the store assigns id and timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub thread_title: String,
    pub color: ThreadColor,
    pub number: u8,
    pub content: String,
    #[serde(default)]
    pub beliefs: Vec<Belief>,
    #[serde(default)]
    pub victories: Vec<Victory>,
}

impl NewEntry {
    pub fn new(
        thread_title: impl Into<String>,
        color: ThreadColor,
        number: u8,
        content: impl Into<String>,
    ) -> Self {
        Self {
            thread_title: thread_title.into(),
            color,
            number,
            content: content.into(),
            beliefs: Vec::new(),
            victories: Vec::new(),
        }
    }

    /// Validate the caller-supplied fields
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.thread_title.trim().is_empty() {
            return Err(EntryValidationError::EmptyThreadTitle);
        }
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&self.number) {
            return Err(EntryValidationError::NumberOutOfRange(self.number));
        }
        if self.content.trim().is_empty() {
            return Err(EntryValidationError::EmptyContent);
        }
        Ok(())
    }
}

/// A stored journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: EntryId,
    pub thread_title: String,
    pub color: ThreadColor,
    pub number: u8,
    pub content: String,
    #[serde(default)]
    pub beliefs: Vec<Belief>,
    #[serde(default)]
    pub victories: Vec<Victory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Stamp new content with a fresh id and matching timestamps
    pub fn from_new(entry: NewEntry, now: DateTime<Utc>) -> Self {
        Self {
            id: EntryId::new(),
            thread_title: entry.thread_title,
            color: entry.color,
            number: entry.number,
            content: entry.content,
            beliefs: entry.beliefs,
            victories: entry.victories,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the reflection text
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.touch();
    }

    /// Append a victory
    pub fn add_victory(&mut self, victory: Victory) {
        self.victories.push(victory);
        self.touch();
    }

    /// Remove a victory, returning it if present
    pub fn remove_victory(&mut self, id: &VictoryId) -> Option<Victory> {
        let pos = self.victories.iter().position(|v| v.id == *id)?;
        let removed = self.victories.remove(pos);
        self.touch();
        Some(removed)
    }

    /// Case-insensitive match against thread title, content and beliefs
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.thread_title.to_lowercase().contains(&query)
            || self.content.to_lowercase().contains(&query)
            || self.beliefs.iter().any(|b| {
                b.belief.to_lowercase().contains(&query)
                    || b.how_is_it_a_lie.to_lowercase().contains(&query)
            })
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.thread_title, self.color, self.number)
    }
}

/// Validation errors for new entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyThreadTitle,
    EmptyContent,
    NumberOutOfRange(u8),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyThreadTitle => write!(f, "Thread title cannot be empty"),
            Self::EmptyContent => write!(f, "Entry content cannot be empty"),
            Self::NumberOutOfRange(n) => write!(
                f,
                "Number must be between {} and {} (got {})",
                MIN_NUMBER, MAX_NUMBER, n
            ),
        }
    }
}

impl std::error::Error for EntryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VictoryCategory;
    use chrono::NaiveDate;

    fn sample_new() -> NewEntry {
        let mut entry = NewEntry::new("Fear of failure", ThreadColor::Blue, 3, "Today I noticed...");
        entry.beliefs.push(Belief::new("I always fail", "I passed my exam last year"));
        entry
    }

    #[test]
    fn test_from_new_sets_equal_timestamps() {
        let now = Utc::now();
        let entry = JournalEntry::from_new(sample_new(), now);
        assert_eq!(entry.created_at, entry.updated_at);
        assert_eq!(entry.beliefs.len(), 1);
    }

    #[test]
    fn test_validate_number_range() {
        let mut entry = sample_new();
        assert!(entry.validate().is_ok());
        entry.number = 7;
        assert_eq!(
            entry.validate(),
            Err(EntryValidationError::NumberOutOfRange(7))
        );
        entry.number = 0;
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_set_content_only_moves_updated_at() {
        let created = Utc::now() - chrono::Duration::hours(1);
        let mut entry = JournalEntry::from_new(sample_new(), created);
        entry.set_content("Revised reflection");

        assert_eq!(entry.created_at, created);
        assert!(entry.updated_at > created);
        assert_eq!(entry.content, "Revised reflection");
    }

    #[test]
    fn test_remove_victory() {
        let mut entry = JournalEntry::from_new(sample_new(), Utc::now());
        let victory = Victory::new(
            "Called mom",
            "Long overdue",
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            VictoryCategory::Relationships,
        );
        let id = victory.id.clone();
        entry.add_victory(victory);

        assert!(entry.remove_victory(&VictoryId::new()).is_none());
        assert_eq!(entry.remove_victory(&id).unwrap().title, "Called mom");
        assert!(entry.victories.is_empty());
    }

    #[test]
    fn test_matches_beliefs() {
        let entry = JournalEntry::from_new(sample_new(), Utc::now());
        assert!(entry.matches("EXAM"));
        assert!(entry.matches("fear"));
        assert!(!entry.matches("ocean"));
    }

    #[test]
    fn test_camel_case_wire_format() {
        let entry = JournalEntry::from_new(sample_new(), Utc::now());
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("threadTitle").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json["beliefs"][0].get("howIsItALie").is_some());
    }

    #[test]
    fn test_missing_victories_defaults_to_empty() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "threadTitle": "t",
            "color": "red",
            "number": 1,
            "content": "c",
            "beliefs": [],
            "createdAt": "2025-01-01T00:00:00.000Z",
            "updatedAt": "2025-01-01T00:00:00.000Z"
        }"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert!(entry.victories.is_empty());
    }
}
