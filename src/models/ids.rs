//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. On disk every ID is a bare string. New
//! records get a v4 UUID; records imported from older journals keep whatever
//! id they were written with (timestamps, `victory-<ms>-<rand>`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{JournalError, JournalResult};

/// Shortest prefix accepted when looking an ID up
pub const MIN_PREFIX_LEN: usize = 4;

/// An ID users can refer to by its full value, short form or prefix
pub trait RecordId {
    /// True when `identifier` names exactly this ID
    fn is(&self, identifier: &str) -> bool;

    /// True when `identifier` is this ID or a prefix of it
    fn matches(&self, identifier: &str) -> bool;
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// The ID exactly as stored
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Short form shown in listings
            ///
            /// UUIDs shorten to the prefix plus 8 hex characters; legacy IDs
            /// are shown whole.
            pub fn short(&self) -> String {
                match Uuid::parse_str(&self.0) {
                    Ok(uuid) => format!("{}{}", $display_prefix, &uuid.simple().to_string()[..8]),
                    Err(_) => self.0.clone(),
                }
            }

            fn lookup_key(&self) -> String {
                match Uuid::parse_str(&self.0) {
                    Ok(uuid) => uuid.simple().to_string(),
                    Err(_) => self.0.to_lowercase(),
                }
            }
        }

        impl RecordId for $name {
            fn is(&self, identifier: &str) -> bool {
                let identifier = identifier.trim();
                if identifier == self.0 {
                    return true;
                }
                let bare = identifier.strip_prefix($display_prefix).unwrap_or(identifier);
                match (Uuid::parse_str(bare), Uuid::parse_str(&self.0)) {
                    (Ok(typed), Ok(own)) => typed == own,
                    _ => false,
                }
            }

            fn matches(&self, identifier: &str) -> bool {
                if self.is(identifier) {
                    return true;
                }
                let identifier = identifier.trim();
                let bare = identifier.strip_prefix($display_prefix).unwrap_or(identifier);
                bare.chars().count() >= MIN_PREFIX_LEN
                    && self.lookup_key().starts_with(&bare.to_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.short())
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(EntryId, "ent-");
define_id!(BeliefId, "blf-");
define_id!(VictoryId, "vic-");
define_id!(ManifestationId, "man-");
define_id!(DailyActionId, "act-");

/// Position of the single ID that `identifier` refers to
///
/// An exact ID wins over prefix matches. Returns `Ok(None)` when nothing
/// matches, and `JournalError::Ambiguous` when a prefix fits several IDs.
pub fn resolve<'a, I>(
    ids: impl IntoIterator<Item = &'a I>,
    identifier: &str,
    entity_type: &'static str,
) -> JournalResult<Option<usize>>
where
    I: RecordId + 'a,
{
    let mut candidates = Vec::new();
    for (pos, id) in ids.into_iter().enumerate() {
        if id.is(identifier) {
            return Ok(Some(pos));
        }
        if id.matches(identifier) {
            candidates.push(pos);
        }
    }

    match candidates.as_slice() {
        [] => Ok(None),
        [pos] => Ok(Some(*pos)),
        _ => Err(JournalError::Ambiguous {
            entity_type,
            identifier: identifier.trim().to_string(),
            matches: candidates.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_uuid() {
        let id = EntryId::new();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_id_display() {
        let id = EntryId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("ent-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_serializes_as_bare_string() {
        let id = EntryId::from("550e8400-e29b-41d4-a716-446655440000");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");

        let back: EntryId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_legacy_ids_round_trip() {
        let belief: BeliefId = serde_json::from_str("\"1712345678901\"").unwrap();
        assert_eq!(belief.as_str(), "1712345678901");
        assert_eq!(belief.short(), "1712345678901");

        let victory = VictoryId::from("victory-1712345678901-abc123def");
        assert_eq!(
            serde_json::to_string(&victory).unwrap(),
            "\"victory-1712345678901-abc123def\""
        );
        assert!(victory.is("victory-1712345678901-abc123def"));
        assert!(victory.matches("VICTORY-1712"));
    }

    #[test]
    fn test_matches_short_and_full_forms() {
        let id = VictoryId::from("550e8400-e29b-41d4-a716-446655440000");
        assert!(id.is("550e8400-e29b-41d4-a716-446655440000"));
        assert!(id.is("vic-550e8400e29b41d4a716446655440000"));
        assert!(id.matches("vic-550e8400"));
        assert!(id.matches("550E"));
        assert!(!id.is("550e"));
        assert!(!id.matches("55"));
        assert!(!id.matches("vic-deadbeef"));
    }

    #[test]
    fn test_resolve_unique_prefix() {
        let ids = vec![
            EntryId::from("abcd0000-0000-4000-8000-000000000000"),
            EntryId::from("ef010000-0000-4000-8000-000000000000"),
        ];
        assert_eq!(resolve(&ids, "ent-ef01", "Entry").unwrap(), Some(1));
        assert_eq!(resolve(&ids, "9999", "Entry").unwrap(), None);
    }

    #[test]
    fn test_resolve_shared_prefix_is_ambiguous() {
        let ids = vec![
            EntryId::from("abcd0000-0000-4000-8000-000000000000"),
            EntryId::from("abcd1111-0000-4000-8000-000000000000"),
        ];

        let err = resolve(&ids, "abcd", "Entry").unwrap_err();
        assert!(err.is_ambiguous());
        assert!(err.to_string().contains("2"));

        assert_eq!(resolve(&ids, "abcd1", "Entry").unwrap(), Some(1));
    }

    #[test]
    fn test_resolve_exact_beats_prefix() {
        let ids = vec![VictoryId::from("17123456789"), VictoryId::from("1712345")];
        assert_eq!(resolve(&ids, "1712345", "Victory").unwrap(), Some(1));
    }
}
