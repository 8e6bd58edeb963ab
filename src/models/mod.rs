//! Core data models for H.E.A.L. Journal
//!
//! This module contains the data structures persisted by the journal:
//! entries with their beliefs and victories, and the personal lists.

pub mod color;
pub mod entry;
pub mod ids;
pub mod lists;
pub mod victory;

pub use color::ThreadColor;
pub use entry::{Belief, EntryValidationError, JournalEntry, NewEntry};
pub use ids::{resolve, BeliefId, DailyActionId, EntryId, ManifestationId, RecordId, VictoryId};
pub use lists::{DailyAction, Manifestation};
pub use victory::{Victory, VictoryCategory};
