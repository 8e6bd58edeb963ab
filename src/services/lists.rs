//! Manifestation and daily action services
//!
//! Both lists reject empty text, trim what they store, and append new items
//! at the end.

use crate::error::{JournalError, JournalResult};
use crate::models::{resolve, DailyAction, Manifestation};
use crate::storage::Storage;

fn require_text(text: &str, what: &str) -> JournalResult<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(JournalError::Validation(format!("{} cannot be empty", what)));
    }
    Ok(text.to_string())
}

/// Service for the manifestation list
pub struct ManifestationService<'a> {
    storage: &'a Storage,
}

impl<'a> ManifestationService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> Vec<Manifestation> {
        self.storage.manifestations.get_all()
    }

    pub fn add(&self, content: &str) -> JournalResult<Manifestation> {
        let manifestation = Manifestation::new(require_text(content, "Manifestation")?);
        self.storage.manifestations.push(manifestation.clone())?;
        Ok(manifestation)
    }

    pub fn edit(&self, identifier: &str, content: &str) -> JournalResult<Manifestation> {
        let content = require_text(content, "Manifestation")?;
        let mut items = self.list();
        let pos = resolve(items.iter().map(|m| &m.id), identifier, "Manifestation")?
            .ok_or_else(|| JournalError::item_not_found("Manifestation", identifier))?;

        let item = &mut items[pos];
        item.content = content;
        let updated = item.clone();
        self.storage.manifestations.save_all(&items)?;
        Ok(updated)
    }

    pub fn delete(&self, identifier: &str) -> JournalResult<Manifestation> {
        let mut items = self.list();
        let pos = resolve(items.iter().map(|m| &m.id), identifier, "Manifestation")?
            .ok_or_else(|| JournalError::item_not_found("Manifestation", identifier))?;

        let removed = items.remove(pos);
        self.storage.manifestations.save_all(&items)?;
        Ok(removed)
    }
}

/// Service for daily action steps and their results
pub struct DailyActionService<'a> {
    storage: &'a Storage,
}

impl<'a> DailyActionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> Vec<DailyAction> {
        self.storage.daily_actions.get_all()
    }

    pub fn add(&self, content: &str) -> JournalResult<DailyAction> {
        let action = DailyAction::new(require_text(content, "Action")?);
        self.storage.daily_actions.push(action.clone())?;
        Ok(action)
    }

    pub fn edit(&self, identifier: &str, content: &str) -> JournalResult<DailyAction> {
        let content = require_text(content, "Action")?;
        self.update(identifier, |action| action.set_content(content))
    }

    /// Record what came of an action; empty results are allowed
    pub fn record_results(&self, identifier: &str, results: &str) -> JournalResult<DailyAction> {
        self.update(identifier, |action| action.set_results(results))
    }

    pub fn delete(&self, identifier: &str) -> JournalResult<DailyAction> {
        let mut items = self.list();
        let pos = resolve(items.iter().map(|a| &a.id), identifier, "Action")?
            .ok_or_else(|| JournalError::item_not_found("Action", identifier))?;

        let removed = items.remove(pos);
        self.storage.daily_actions.save_all(&items)?;
        Ok(removed)
    }

    fn update<F>(&self, identifier: &str, apply: F) -> JournalResult<DailyAction>
    where
        F: FnOnce(&mut DailyAction),
    {
        let mut items = self.list();
        let pos = resolve(items.iter().map(|a| &a.id), identifier, "Action")?
            .ok_or_else(|| JournalError::item_not_found("Action", identifier))?;

        let action = &mut items[pos];
        apply(action);
        let updated = action.clone();
        self.storage.daily_actions.save_all(&items)?;
        Ok(updated)
    }
}
