//! Service layer for H.E.A.L. Journal
//!
//! Business logic on top of the storage repositories. Services borrow the
//! `Storage` coordinator and validate input before anything is persisted.

pub mod journal;
pub mod lists;

pub use journal::{JournalService, TimeFrame, VictoryRecord};
pub use lists::{DailyActionService, ManifestationService};
