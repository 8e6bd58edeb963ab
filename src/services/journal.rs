//! Journal service
//!
//! Entry creation with validation, in-place edits, victory management,
//! archive search and time-frame filtering on top of the entry store.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::error::{JournalError, JournalResult};
use crate::models::{resolve, EntryId, JournalEntry, NewEntry, Victory, VictoryId};
use crate::storage::Storage;

/// Time window for browsing the archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFrame {
    All,
    /// Since the most recent Sunday
    Week,
    /// The current calendar month
    Month,
    /// The current calendar year
    Year,
    /// A specific calendar month
    MonthOf { year: i32, month: u32 },
}

impl TimeFrame {
    /// Whether `at` falls inside the window as seen from `now`
    pub fn contains(&self, at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match *self {
            TimeFrame::All => true,
            TimeFrame::Week => {
                let days_since_sunday = now.weekday().num_days_from_sunday() as i64;
                let start = now.date_naive() - Duration::days(days_since_sunday);
                at.date_naive() >= start && at <= now
            }
            TimeFrame::Month => at.year() == now.year() && at.month() == now.month(),
            TimeFrame::Year => at.year() == now.year(),
            TimeFrame::MonthOf { year, month } => at.year() == year && at.month() == month,
        }
    }

    /// Parse "all", "week", "month", "year" or "YYYY-MM"
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(TimeFrame::All),
            "week" => Some(TimeFrame::Week),
            "month" => Some(TimeFrame::Month),
            "year" => Some(TimeFrame::Year),
            other => {
                let date = NaiveDate::parse_from_str(&format!("{}-01", other), "%Y-%m-%d").ok()?;
                Some(TimeFrame::MonthOf {
                    year: date.year(),
                    month: date.month(),
                })
            }
        }
    }
}

/// A victory together with the entry it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct VictoryRecord {
    pub entry_id: EntryId,
    pub thread_title: String,
    pub victory: Victory,
}

/// Service for journal entry management
pub struct JournalService<'a> {
    storage: &'a Storage,
}

impl<'a> JournalService<'a> {
    /// Create a new journal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and store a new entry
    pub fn create(&self, entry: NewEntry) -> JournalResult<JournalEntry> {
        entry
            .validate()
            .map_err(|e| JournalError::Validation(e.to_string()))?;

        for victory in &entry.victories {
            victory.validate().map_err(JournalError::Validation)?;
        }

        let stored = self.storage.entries.save_entry(entry)?;
        tracing::info!(id = %stored.id, thread = %stored.thread_title, "created entry");
        Ok(stored)
    }

    /// Get an entry by full or short ID
    pub fn get(&self, identifier: &str) -> JournalResult<JournalEntry> {
        self.storage
            .entries
            .find(identifier)?
            .ok_or_else(|| JournalError::entry_not_found(identifier))
    }

    /// All entries, newest first
    pub fn list(&self) -> Vec<JournalEntry> {
        self.storage.entries.get_all()
    }

    /// Entries created inside the given window
    pub fn list_in(&self, frame: TimeFrame, now: DateTime<Utc>) -> Vec<JournalEntry> {
        self.list()
            .into_iter()
            .filter(|e| frame.contains(e.created_at, now))
            .collect()
    }

    /// Distinct (year, month) pairs that have entries, newest first
    pub fn available_months(&self) -> Vec<(i32, u32)> {
        let mut months: Vec<(i32, u32)> = self
            .list()
            .iter()
            .map(|e| (e.created_at.year(), e.created_at.month()))
            .collect();
        months.sort_unstable_by(|a, b| b.cmp(a));
        months.dedup();
        months
    }

    /// Replace an entry's reflection text
    pub fn edit_content(&self, identifier: &str, content: &str) -> JournalResult<JournalEntry> {
        let content = content.trim();
        if content.is_empty() {
            return Err(JournalError::Validation(
                "Entry content cannot be empty".into(),
            ));
        }

        let mut entry = self.get(identifier)?;
        entry.set_content(content);
        self.storage.entries.replace(entry.clone())?;

        tracing::info!(id = %entry.id, "edited entry content");
        Ok(entry)
    }

    /// Delete an entry, returning what was removed
    pub fn delete(&self, identifier: &str) -> JournalResult<JournalEntry> {
        let entry = self.get(identifier)?;
        self.storage.entries.delete(&entry.id)?;

        tracing::info!(id = %entry.id, "deleted entry");
        Ok(entry)
    }

    /// Entries whose thread, reflection or beliefs contain `query`
    pub fn search(&self, query: &str) -> Vec<JournalEntry> {
        self.list().into_iter().filter(|e| e.matches(query)).collect()
    }

    /// Attach a victory to an entry
    pub fn add_victory(&self, identifier: &str, victory: Victory) -> JournalResult<JournalEntry> {
        victory.validate().map_err(JournalError::Validation)?;

        let mut entry = self.get(identifier)?;
        entry.add_victory(victory);
        self.storage.entries.replace(entry.clone())?;

        Ok(entry)
    }

    /// Every victory across all entries, in entry order
    pub fn victories(&self) -> Vec<VictoryRecord> {
        self.list()
            .into_iter()
            .flat_map(|entry| {
                let entry_id = entry.id;
                let thread_title = entry.thread_title;
                entry.victories.into_iter().map(move |victory| VictoryRecord {
                    entry_id: entry_id.clone(),
                    thread_title: thread_title.clone(),
                    victory,
                })
            })
            .collect()
    }

    /// Victories whose title or description contain `query`
    pub fn search_victories(&self, query: &str) -> Vec<VictoryRecord> {
        self.victories()
            .into_iter()
            .filter(|r| r.victory.matches(query))
            .collect()
    }

    /// Remove a victory wherever it is stored
    ///
    /// The identifier is resolved across every entry, so a prefix shared by
    /// victories on different entries is ambiguous too.
    pub fn delete_victory(&self, identifier: &str) -> JournalResult<VictoryRecord> {
        let entries = self.list();
        let locations: Vec<(usize, &VictoryId)> = entries
            .iter()
            .enumerate()
            .flat_map(|(pos, e)| e.victories.iter().map(move |v| (pos, &v.id)))
            .collect();

        let found = resolve(locations.iter().map(|(_, id)| *id), identifier, "Victory")?;
        let (entry_pos, victory_id) = match found {
            Some(pos) => (locations[pos].0, locations[pos].1.clone()),
            None => return Err(JournalError::victory_not_found(identifier)),
        };

        let Some(mut entry) = entries.into_iter().nth(entry_pos) else {
            return Err(JournalError::victory_not_found(identifier));
        };
        let victory = entry
            .remove_victory(&victory_id)
            .ok_or_else(|| JournalError::victory_not_found(identifier))?;

        let record = VictoryRecord {
            entry_id: entry.id.clone(),
            thread_title: entry.thread_title.clone(),
            victory,
        };
        self.storage.entries.replace(entry)?;
        tracing::info!(id = %record.victory.id, "deleted victory");
        Ok(record)
    }
}
