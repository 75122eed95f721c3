//! Favorites bound to `localStorage`, plus the JSON file export.

use crate::state::favorites::Favorites;
use crate::util::download::{favorites_export_file_name, json_data_uri, trigger_download};
use crate::util::storage::LocalStorage;

pub struct FavoritesManager {
    favorites: Favorites<LocalStorage>,
}

impl FavoritesManager {
    #[must_use]
    pub fn new() -> Self {
        Self { favorites: Favorites::load(LocalStorage) }
    }

    pub fn add(&mut self, item: &str) -> bool {
        self.favorites.add(item)
    }

    pub fn remove(&mut self, item: &str) -> bool {
        self.favorites.remove(item)
    }

    pub fn toggle(&mut self, item: &str) -> bool {
        self.favorites.toggle(item)
    }

    #[must_use]
    pub fn has(&self, item: &str) -> bool {
        self.favorites.has(item)
    }

    #[must_use]
    pub fn get_all(&self) -> Vec<String> {
        self.favorites.get_all()
    }

    pub fn clear(&mut self) {
        self.favorites.clear();
    }

    /// Download the list as `consumesafe-favoris-<date>.json`.
    pub fn export(&self) {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        let file_name = favorites_export_file_name(&iso);
        trigger_download(&json_data_uri(&self.favorites.export_payload()), &file_name);
        log::info!("exported {} favorites to {file_name}", self.favorites.len());
    }
}

impl Default for FavoritesManager {
    fn default() -> Self {
        Self::new()
    }
}
