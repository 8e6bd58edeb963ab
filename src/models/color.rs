//! Thread color model
//!
//! Every entry is tagged with one of the eleven colors of the color wheel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color chosen for an entry's thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
    Black,
    White,
    Brown,
    Grey,
}

impl ThreadColor {
    /// All colors in wheel order
    pub fn all() -> &'static [ThreadColor] {
        &[
            Self::Red,
            Self::Orange,
            Self::Yellow,
            Self::Green,
            Self::Blue,
            Self::Indigo,
            Self::Violet,
            Self::Black,
            Self::White,
            Self::Brown,
            Self::Grey,
        ]
    }

    /// Lowercase name, as stored on disk
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Black => "black",
            Self::White => "white",
            Self::Brown => "brown",
            Self::Grey => "grey",
        }
    }

    /// Parse a color from user input (case-insensitive, accepts "gray")
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "gray" {
            return Some(Self::Grey);
        }
        Self::all().iter().copied().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for ThreadColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eleven_colors() {
        assert_eq!(ThreadColor::all().len(), 11);
    }

    #[test]
    fn test_parse() {
        assert_eq!(ThreadColor::parse("Indigo"), Some(ThreadColor::Indigo));
        assert_eq!(ThreadColor::parse("gray"), Some(ThreadColor::Grey));
        assert_eq!(ThreadColor::parse("magenta"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ThreadColor::Violet).unwrap();
        assert_eq!(json, "\"violet\"");
        let back: ThreadColor = serde_json::from_str("\"brown\"").unwrap();
        assert_eq!(back, ThreadColor::Brown);
    }
}
