//! Reminder subscribers and the store that holds them
//!
//! The subscriber store is multi-user and separate from the journal. Each
//! record tracks whether notifications are on, where to push them, and when
//! the last one went out.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{JournalError, JournalResult};
use crate::storage::file_io::{read_json, write_json_atomic};

/// A user who can receive reminders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSubscriber {
    pub user_id: String,
    pub notifications_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_notification_time: Option<DateTime<Utc>>,
    /// Idempotency key of the last message sent to this user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_send_key: Option<String>,
}

impl ReminderSubscriber {
    pub fn new(user_id: impl Into<String>, token: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            notifications_enabled: true,
            notification_token: token,
            last_notification_time: None,
            last_send_key: None,
        }
    }
}

/// Source of subscribers for the scheduler
pub trait SubscriberStore {
    /// Subscribers with notifications turned on
    fn enabled_subscribers(&self) -> JournalResult<Vec<ReminderSubscriber>>;

    /// Record that a reminder went out to `user_id`
    fn record_notification(
        &self,
        user_id: &str,
        sent_at: DateTime<Utc>,
        send_key: &str,
    ) -> JournalResult<()>;
}

/// Subscriber store backed by a JSON file
///
/// Unlike the journal records, an unreadable file is an error here so a
/// broken store is reported instead of silently skipping everyone.
pub struct FileSubscriberStore {
    path: PathBuf,
}

impl FileSubscriberStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// All subscribers, enabled or not
    pub fn get_all(&self) -> JournalResult<Vec<ReminderSubscriber>> {
        read_json(&self.path)
    }

    /// Turn notifications on for a user, creating the record if needed
    pub fn subscribe(&self, user_id: &str, token: Option<String>) -> JournalResult<ReminderSubscriber> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(JournalError::Validation("User ID cannot be empty".into()));
        }

        let mut subscribers = self.get_all()?;
        let subscriber = match subscribers.iter_mut().find(|s| s.user_id == user_id) {
            Some(existing) => {
                existing.notifications_enabled = true;
                if token.is_some() {
                    existing.notification_token = token;
                }
                existing.clone()
            }
            None => {
                let created = ReminderSubscriber::new(user_id, token);
                subscribers.push(created.clone());
                created
            }
        };

        write_json_atomic(&self.path, &subscribers)?;
        Ok(subscriber)
    }

    /// Turn notifications off for a user
    pub fn unsubscribe(&self, user_id: &str) -> JournalResult<()> {
        let mut subscribers = self.get_all()?;
        let subscriber = subscribers
            .iter_mut()
            .find(|s| s.user_id == user_id)
            .ok_or_else(|| JournalError::item_not_found("Subscriber", user_id))?;

        subscriber.notifications_enabled = false;
        write_json_atomic(&self.path, &subscribers)
    }
}

impl SubscriberStore for FileSubscriberStore {
    fn enabled_subscribers(&self) -> JournalResult<Vec<ReminderSubscriber>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|s| s.notifications_enabled)
            .collect())
    }

    fn record_notification(
        &self,
        user_id: &str,
        sent_at: DateTime<Utc>,
        send_key: &str,
    ) -> JournalResult<()> {
        let mut subscribers = self.get_all()?;
        let subscriber = subscribers
            .iter_mut()
            .find(|s| s.user_id == user_id)
            .ok_or_else(|| JournalError::item_not_found("Subscriber", user_id))?;

        subscriber.last_notification_time = Some(sent_at);
        subscriber.last_send_key = Some(send_key.to_string());
        write_json_atomic(&self.path, &subscribers)
    }
}
