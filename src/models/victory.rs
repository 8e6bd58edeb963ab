//! Victory model
//!
//! Victories are the daily wins and blessings recorded against an entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::VictoryId;

/// Life area a victory belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VictoryCategory {
    #[default]
    Spiritual,
    Personal,
    Relationships,
    Health,
    Career,
    Other,
}

impl VictoryCategory {
    /// All categories in display order
    pub fn all() -> &'static [VictoryCategory] {
        &[
            Self::Spiritual,
            Self::Personal,
            Self::Relationships,
            Self::Health,
            Self::Career,
            Self::Other,
        ]
    }

    /// Lowercase name, as stored on disk
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spiritual => "spiritual",
            Self::Personal => "personal",
            Self::Relationships => "relationships",
            Self::Health => "health",
            Self::Career => "career",
            Self::Other => "other",
        }
    }

    /// Human-friendly label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Spiritual => "Spiritual Growth",
            Self::Personal => "Personal Achievement",
            Self::Relationships => "Relationships",
            Self::Health => "Health & Wellness",
            Self::Career => "Career & Goals",
            Self::Other => "Other Blessings",
        }
    }

    /// Parse a category from user input
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::all().iter().copied().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for VictoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded victory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Victory {
    pub id: VictoryId,
    pub title: String,
    pub description: String,
    /// Day the victory happened (YYYY-MM-DD)
    pub date: NaiveDate,
    pub category: VictoryCategory,
}

impl Victory {
    /// Create a new victory with a fresh id
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        category: VictoryCategory,
    ) -> Self {
        Self {
            id: VictoryId::new(),
            title: title.into().trim().to_string(),
            description: description.into().trim().to_string(),
            date,
            category,
        }
    }

    /// Title and description are both required
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Victory title cannot be empty".into());
        }
        if self.description.trim().is_empty() {
            return Err("Victory description cannot be empty".into());
        }
        Ok(())
    }

    /// Case-insensitive match on title or description
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Victory {
        Victory::new(
            "  Ran 5k ",
            "First time without stopping",
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            VictoryCategory::Health,
        )
    }

    #[test]
    fn test_new_trims() {
        let v = sample();
        assert_eq!(v.title, "Ran 5k");
        assert!(v.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_description() {
        let mut v = sample();
        v.description = "   ".into();
        assert!(v.validate().is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let v = sample();
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["date"], "2025-03-14");
        assert_eq!(json["category"], "health");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let v = sample();
        assert!(v.matches("RAN"));
        assert!(v.matches("stopping"));
        assert!(!v.matches("swim"));
    }

    #[test]
    fn test_six_categories() {
        assert_eq!(VictoryCategory::all().len(), 6);
        assert_eq!(VictoryCategory::parse("Career"), Some(VictoryCategory::Career));
    }
}
