//! List repository for JSON storage
//!
//! Manifestations and daily actions are each a plain JSON array kept in its
//! own record. The repository is generic over the item type.

use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::JournalResult;

use super::file_io::{read_json_lenient, write_json_atomic};

/// Repository for an ordered list of items
pub struct ListRepository<T> {
    path: PathBuf,
    _item: PhantomData<T>,
}

impl<T> ListRepository<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Create a new list repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _item: PhantomData,
        }
    }

    /// All items in stored order
    pub fn get_all(&self) -> Vec<T> {
        read_json_lenient(&self.path)
    }

    /// Replace the stored list
    pub fn save_all(&self, items: &[T]) -> JournalResult<()> {
        write_json_atomic(&self.path, &items)
    }

    /// Append an item to the end of the list
    pub fn push(&self, item: T) -> JournalResult<()> {
        let mut items = self.get_all();
        items.push(item);
        self.save_all(&items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Manifestation;
    use tempfile::TempDir;

    #[test]
    fn test_push_appends_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let repo: ListRepository<Manifestation> =
            ListRepository::new(temp_dir.path().join("manifestations.json"));

        repo.push(Manifestation::new("first")).unwrap();
        repo.push(Manifestation::new("second")).unwrap();

        let items = repo.get_all();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].content, "first");
        assert_eq!(items[1].content, "second");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo: ListRepository<Manifestation> =
            ListRepository::new(temp_dir.path().join("nope.json"));
        assert!(repo.get_all().is_empty());
    }
}
