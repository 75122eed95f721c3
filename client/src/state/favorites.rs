//! Client-side favorites list.
//!
//! DESIGN
//! ======
//! An ordered list of unique product identifiers mirrored to storage as a
//! JSON array. Every mutating call that changes the list performs exactly
//! one storage write, so storage never holds a partially applied change.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use crate::util::storage::{KeyValueStore, load_json, save_json};

/// Storage key holding the JSON array of favorites.
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug)]
pub struct Favorites<S> {
    items: Vec<String>,
    store: S,
}

impl<S: KeyValueStore> Favorites<S> {
    /// Load persisted favorites. A missing or malformed value starts empty.
    pub fn load(store: S) -> Self {
        let items = load_json(&store, FAVORITES_KEY).unwrap_or_default();
        Self { items, store }
    }

    /// Append `item` if absent. Returns whether it was inserted.
    pub fn add(&mut self, item: &str) -> bool {
        if self.has(item) {
            return false;
        }
        self.items.push(item.to_owned());
        self.save();
        true
    }

    /// Remove `item` if present. Returns whether it was removed.
    pub fn remove(&mut self, item: &str) -> bool {
        let Some(index) = self.items.iter().position(|i| i == item) else {
            return false;
        };
        self.items.remove(index);
        self.save();
        true
    }

    /// Flip membership of `item`. Returns whether it is now a favorite.
    pub fn toggle(&mut self, item: &str) -> bool {
        if self.remove(item) {
            false
        } else {
            self.add(item)
        }
    }

    #[must_use]
    pub fn has(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Snapshot of the list in insertion order.
    #[must_use]
    pub fn get_all(&self) -> Vec<String> {
        self.items.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.save();
    }

    /// Pretty-printed JSON document of the current list, as exported to file.
    #[must_use]
    pub fn export_payload(&self) -> String {
        serde_json::to_string_pretty(&self.items).unwrap_or_else(|_| "[]".to_owned())
    }

    fn save(&self) {
        save_json(&self.store, FAVORITES_KEY, &self.items);
    }
}
