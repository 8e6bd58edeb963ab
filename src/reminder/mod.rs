//! Push reminders for H.E.A.L. Journal users
//!
//! The scheduler is independent of the journal: it reads its own subscriber
//! store and hands messages to a `PushMessenger`. File-backed adapters are
//! provided so batches can run locally from the CLI.

pub mod messenger;
pub mod scheduler;
pub mod subscriber;

pub use messenger::{Delivery, OutboxMessenger, OutboxRecord, PushMessage, PushMessenger};
pub use scheduler::{send_key, BatchReport, Outcome, ReminderScheduler, UserOutcome};
pub use subscriber::{FileSubscriberStore, ReminderSubscriber, SubscriberStore};

use crate::config::{JournalPaths, Settings};
use crate::error::JournalResult;

/// Scheduler wired to the file-backed store and outbox under `paths`
pub fn file_scheduler(
    paths: &JournalPaths,
    settings: &Settings,
) -> JournalResult<ReminderScheduler<FileSubscriberStore, OutboxMessenger>> {
    ReminderScheduler::new(
        FileSubscriberStore::new(paths.subscribers_file()),
        OutboxMessenger::new(paths.outbox_file()),
        settings.reminders.clone(),
    )
}
