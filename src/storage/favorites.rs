//! The favourites store
//!
//! [`FavoritesStore`] keeps a capped, most-recent-first list of ideas in a
//! single [`KeyValueStore`] slot as a JSON array.
//!
//! Reads never fail: an unreadable or corrupt slot reads as empty and
//! malformed entries are dropped. Writes (save, remove, clear, import) report
//! failure so the caller can tell the user.

use std::collections::HashSet;

use serde_json::Value;

use super::{KeyValueStore, StorageError};
use crate::{BookIdea, domain::idea::missing_field};

/// The slot key used by the web application.
pub const DEFAULT_KEY: &str = "bookSpark_favorites";

/// The number of favourites kept by default.
pub const DEFAULT_CAPACITY: usize = 100;

/// Why an import payload was rejected.
///
/// Nothing is written when an import fails.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The payload is not JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The payload is JSON but not an array.
    #[error("invalid format: expected an array of ideas")]
    NotAnArray,

    /// An element lacks a required field.
    #[error("invalid idea at index {index}: missing required field '{field}'")]
    MissingField {
        /// Position of the element in the payload.
        index: usize,
        /// The missing field.
        field: &'static str,
    },

    /// An element has the required fields but is not a valid idea.
    #[error("invalid idea at index {index}: {source}")]
    InvalidIdea {
        /// Position of the element in the payload.
        index: usize,
        /// Why it could not be read.
        source: serde_json::Error,
    },

    /// The merged favourites could not be stored.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A capped, ordered collection of favourite ideas.
#[derive(Debug, Clone)]
pub struct FavoritesStore<S> {
    slot: S,
    key: String,
    capacity: usize,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// A store using the default key and capacity.
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            key: DEFAULT_KEY.to_string(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Uses a different slot key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Keeps at most `capacity` favourites.
    ///
    /// A capacity of zero is raised to one, so a successful save always keeps
    /// the saved idea.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// The maximum number of favourites kept.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The slot key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying key-value store.
    pub const fn slot(&self) -> &S {
        &self.slot
    }

    /// Saves an idea.
    ///
    /// An idea whose id is already stored replaces the stored one in place;
    /// a new idea goes to the front. The list is then cut to capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or written.
    pub fn save(&mut self, idea: BookIdea) -> Result<(), StorageError> {
        let mut ideas = self.load()?;

        if let Some(existing) = ideas.iter_mut().find(|existing| existing.id == idea.id) {
            *existing = idea;
        } else {
            ideas.insert(0, idea);
        }
        ideas.truncate(self.capacity);

        self.persist(&ideas)
    }

    /// Every stored idea, most recently added first.
    ///
    /// Returns an empty list if the slot cannot be read.
    #[must_use]
    pub fn all(&self) -> Vec<BookIdea> {
        self.load().unwrap_or_else(|e| {
            tracing::error!("Failed to load favourites: {e}");
            Vec::new()
        })
    }

    /// Removes the idea with the given id.
    ///
    /// Returns whether an idea was removed; removing an unknown id is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or written.
    pub fn remove(&mut self, id: &str) -> Result<bool, StorageError> {
        let mut ideas = self.load()?;
        let before = ideas.len();
        ideas.retain(|idea| idea.id != id);

        if ideas.len() == before {
            tracing::debug!("No favourite with id {id}");
            return Ok(false);
        }

        self.persist(&ideas)?;
        Ok(true)
    }

    /// Deletes every favourite.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be deleted.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.slot.remove(&self.key)
    }

    /// The favourites as a pretty-printed JSON array.
    ///
    /// Returns `[]` if serialization fails.
    #[must_use]
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.all()).unwrap_or_else(|e| {
            tracing::error!("Failed to export favourites: {e}");
            "[]".to_string()
        })
    }

    /// Merges a JSON array of ideas into the store.
    ///
    /// Imported ideas go first and win over stored ideas with the same id.
    /// The merged list is cut to capacity. Returns the number of ideas in the
    /// payload.
    ///
    /// # Errors
    ///
    /// Returns an error, without writing anything, if the payload is not an
    /// array or any element lacks `id`, `title` or `concept`. Also fails if
    /// the slot cannot be read or written.
    pub fn import_json(&mut self, json: &str) -> Result<usize, ImportError> {
        let Value::Array(values) = serde_json::from_str(json).map_err(ImportError::InvalidJson)?
        else {
            return Err(ImportError::NotAnArray);
        };

        let imported = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                if let Some(field) = missing_field(&value) {
                    return Err(ImportError::MissingField { index, field });
                }
                serde_json::from_value::<BookIdea>(value)
                    .map_err(|source| ImportError::InvalidIdea { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count = imported.len();
        let existing = self.load()?;

        let mut seen = HashSet::new();
        let merged: Vec<BookIdea> = imported
            .into_iter()
            .chain(existing)
            .filter(|idea| seen.insert(idea.id.clone()))
            .take(self.capacity)
            .collect();

        self.persist(&merged)?;
        tracing::info!("Imported {count} ideas; {} favourites stored", merged.len());
        Ok(count)
    }

    /// Ideas matching `query` case-insensitively in a title, the concept, the
    /// genre, a theme, the main character or the setting, in store order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<BookIdea> {
        let needle = query.to_lowercase();
        self.all()
            .into_iter()
            .filter(|idea| idea.matches(&needle))
            .collect()
    }

    /// Up to `count` ideas, newest `generatedAt` first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<BookIdea> {
        let mut ideas = self.all();
        ideas.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
        ideas.truncate(count);
        ideas
    }

    /// Ideas whose display genre equals `genre`, ignoring case.
    #[must_use]
    pub fn by_genre(&self, genre: &str) -> Vec<BookIdea> {
        let genre = genre.to_lowercase();
        self.all()
            .into_iter()
            .filter(|idea| idea.genre.to_lowercase() == genre)
            .collect()
    }

    /// The idea with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<BookIdea> {
        self.all().into_iter().find(|idea| idea.id == id)
    }

    /// Whether an idea with the given id is stored.
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.all().iter().any(|idea| idea.id == id)
    }

    /// The number of stored ideas.
    #[must_use]
    pub fn count(&self) -> usize {
        self.all().len()
    }

    /// Reads the slot.
    ///
    /// A missing slot is empty. A slot that is not a JSON array is logged and
    /// treated as empty, so the next write replaces it. Entries that are not
    /// valid ideas are dropped.
    fn load(&self) -> Result<Vec<BookIdea>, StorageError> {
        let Some(json) = self.slot.get(&self.key)? else {
            return Ok(Vec::new());
        };

        let values: Vec<Value> = match serde_json::from_str(&json) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("Ignoring unreadable favourites in slot '{}': {e}", self.key);
                return Ok(Vec::new());
            }
        };

        Ok(values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                if let Some(field) = missing_field(&value) {
                    tracing::warn!("Dropping stored idea {index}: missing '{field}'");
                    return None;
                }
                serde_json::from_value(value)
                    .inspect_err(|e| tracing::warn!("Dropping stored idea {index}: {e}"))
                    .ok()
            })
            .collect())
    }

    fn persist(&mut self, ideas: &[BookIdea]) -> Result<(), StorageError> {
        let json = serde_json::to_string(ideas)?;
        self.slot.set(&self.key, &json)
    }
}
