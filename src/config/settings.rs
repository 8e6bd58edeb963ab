//! User settings for H.E.A.L. Journal
//!
//! Manages user preferences including date display, backup retention and the
//! reminder schedule.

use serde::{Deserialize, Serialize};

use super::paths::JournalPaths;
use crate::error::JournalError;

/// Backup retention settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupRetention {
    /// Number of backup files to keep
    pub keep_count: u32,
}

impl Default for BackupRetention {
    fn default() -> Self {
        Self { keep_count: 30 }
    }
}

/// Reminder schedule and message template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderSettings {
    /// How often the scheduler runs a batch
    #[serde(default = "default_interval_hours")]
    pub interval_hours: u32,

    /// Minimum time since the last notification before a user is due again
    #[serde(default = "default_interval_hours")]
    pub threshold_hours: u32,

    /// Notification title
    #[serde(default = "default_title")]
    pub title: String,

    /// Notification body
    #[serde(default = "default_body")]
    pub body: String,

    /// Link opened when the notification is clicked (webpush option)
    #[serde(default = "default_link")]
    pub link: String,
}

fn default_interval_hours() -> u32 {
    4
}

fn default_title() -> String {
    "Time to H.E.A.L.".to_string()
}

fn default_body() -> String {
    "Ready for your next healing session? Take a moment to continue your journey.".to_string()
}

fn default_link() -> String {
    "https://your-app-url.com".to_string()
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            interval_hours: default_interval_hours(),
            threshold_hours: default_interval_hours(),
            title: default_title(),
            body: default_body(),
            link: default_link(),
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format used in listings (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Backup retention policy
    #[serde(default)]
    pub backup_retention: BackupRetention,

    /// Reminder scheduler settings
    #[serde(default)]
    pub reminders: ReminderSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            backup_retention: BackupRetention::default(),
            reminders: ReminderSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &JournalPaths) -> Result<Self, JournalError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                JournalError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                JournalError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &JournalPaths) -> Result<(), JournalError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            JournalError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            JournalError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
