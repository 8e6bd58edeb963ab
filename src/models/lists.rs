//! Personal list models
//!
//! Manifestations (things the user wants to bring into their life) and daily
//! action steps with their documented results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{DailyActionId, ManifestationId};

/// A manifestation statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifestation {
    pub id: ManifestationId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Manifestation {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: ManifestationId::new(),
            content: content.into().trim().to_string(),
            created_at: Utc::now(),
        }
    }
}

/// A daily action step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAction {
    pub id: DailyActionId,
    pub content: String,
    #[serde(default)]
    pub results: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DailyAction {
    pub fn new(content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: DailyActionId::new(),
            content: content.into().trim().to_string(),
            results: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into().trim().to_string();
        self.updated_at = Utc::now();
    }

    pub fn set_results(&mut self, results: impl Into<String>) {
        self.results = results.into().trim().to_string();
        self.updated_at = Utc::now();
    }
}
