//! In-memory store for fetched API results
//!
//! Provides a `ResultStore` mapping a string key (an email address, domain
//! or company name) to the JSON payload last fetched for it. Entries live
//! only as long as the store; there is no expiry and no persistence.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when operating on stored results
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The key has no saved result
    #[error("'{0}' not found in saved results")]
    NotFound(String),
}

/// A stored result plus the time it was recorded
#[derive(Debug, Clone)]
struct StoredResult {
    /// The JSON payload as returned by the API
    value: Value,
    /// When the entry was saved or last updated
    saved_at: DateTime<Utc>,
}

/// In-memory associative store of API results
///
/// Mutating methods take `&mut self`; exclusive access is enforced by the
/// borrow checker rather than a lock, matching the single-owner usage in
/// [`HunterService`](crate::service::HunterService).
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    entries: HashMap<String, StoredResult>,
}

impl ResultStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a result under the given key, overwriting any previous entry
    pub fn save(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(
            key.into(),
            StoredResult {
                value,
                saved_at: Utc::now(),
            },
        );
    }

    /// Returns the saved result for the key, or `None` if absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Returns when the key was saved or last updated, or `None` if absent
    pub fn saved_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.entries.get(key).map(|entry| entry.saved_at)
    }

    /// Checks whether the key has a saved result
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Replaces the result for an existing key.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if the key has no saved result.
    pub fn update(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.value = value;
                entry.saved_at = Utc::now();
                Ok(())
            }
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    /// Removes the result for an existing key and returns it.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if the key has no saved result.
    pub fn delete(&mut self, key: &str) -> Result<Value, StoreError> {
        match self.entries.remove(key) {
            Some(entry) => Ok(entry.value),
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    /// Iterates over all saved results
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), &entry.value))
    }

    /// Iterates over all saved keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of saved results
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no saved results
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
