//! Push messages and the messenger that delivers them

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{JournalError, JournalResult};

/// A reminder ready to be pushed to one device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushMessage {
    pub token: String,
    pub title: String,
    pub body: String,
    /// Opened when the notification is clicked
    pub link: String,
    pub idempotency_key: String,
}

/// What happened to a message handed to a messenger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// The key was already delivered; nothing was sent
    Duplicate,
}

/// Delivery channel for push messages
pub trait PushMessenger {
    fn send(&self, message: &PushMessage) -> JournalResult<Delivery>;
}

/// One line of the outbox
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboxRecord {
    pub sent_at: DateTime<Utc>,
    pub message: PushMessage,
}

/// Messenger that appends delivered messages to a JSONL outbox
///
/// A key that already appears in the outbox is refused as a duplicate.
pub struct OutboxMessenger {
    path: PathBuf,
}

impl OutboxMessenger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// All delivered messages, oldest first
    pub fn read_all(&self) -> JournalResult<Vec<OutboxRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .map_err(|e| JournalError::Io(format!("Failed to open outbox: {}", e)))?;

        let mut records = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                JournalError::Io(format!("Failed to read outbox line {}: {}", line_num + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let record: OutboxRecord = serde_json::from_str(&line).map_err(|e| {
                JournalError::Json(format!(
                    "Failed to parse outbox record at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            records.push(record);
        }

        Ok(records)
    }

    fn delivered_keys(&self) -> JournalResult<HashSet<String>> {
        Ok(self
            .read_all()?
            .into_iter()
            .map(|r| r.message.idempotency_key)
            .collect())
    }
}

impl PushMessenger for OutboxMessenger {
    fn send(&self, message: &PushMessage) -> JournalResult<Delivery> {
        if self.delivered_keys()?.contains(&message.idempotency_key) {
            return Ok(Delivery::Duplicate);
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| JournalError::Io(format!("Failed to open outbox: {}", e)))?;

        let record = OutboxRecord {
            sent_at: Utc::now(),
            message: message.clone(),
        };
        let json = serde_json::to_string(&record)
            .map_err(|e| JournalError::Json(format!("Failed to serialize message: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| JournalError::Io(format!("Failed to write outbox: {}", e)))?;
        file.flush()
            .map_err(|e| JournalError::Io(format!("Failed to flush outbox: {}", e)))?;

        Ok(Delivery::Delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn message(key: &str) -> PushMessage {
        PushMessage {
            token: "tok".into(),
            title: "Time to H.E.A.L.".into(),
            body: "body".into(),
            link: "https://example.test".into(),
            idempotency_key: key.into(),
        }
    }

    #[test]
    fn test_outbox_appends_lines() {
        let temp_dir = TempDir::new().unwrap();
        let outbox = OutboxMessenger::new(temp_dir.path().join("reminders").join("outbox.jsonl"));

        assert_eq!(outbox.send(&message("a:1")).unwrap(), Delivery::Delivered);
        assert_eq!(outbox.send(&message("b:1")).unwrap(), Delivery::Delivered);

        let records = outbox.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].message.idempotency_key, "b:1");
    }

    #[test]
    fn test_outbox_refuses_duplicate_key() {
        let temp_dir = TempDir::new().unwrap();
        let outbox = OutboxMessenger::new(temp_dir.path().join("outbox.jsonl"));

        outbox.send(&message("a:1")).unwrap();
        assert_eq!(outbox.send(&message("a:1")).unwrap(), Delivery::Duplicate);
        assert_eq!(outbox.read_all().unwrap().len(), 1);
    }
}
