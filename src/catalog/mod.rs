//! Product catalog: boycotted products and local alternatives.
//!
//! DESIGN
//! ======
//! The catalog is loaded once at startup from two JSON files and is
//! immutable afterwards, so handlers share it through an `Arc` without
//! locking. Query helpers return owned vectors ready for serialization.
//!
//! ERROR HANDLING
//! ==============
//! A missing or malformed data file is logged and that list loads empty.
//! The site stays up with an empty catalog rather than refusing to start.

pub mod check;
pub mod search;

#[cfg(test)]
pub(crate) mod test_helpers;

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const BOYCOTT_FILE: &str = "boycott-list.json";
pub const ALTERNATIVES_FILE: &str = "alternatives.json";

// =============================================================================
// TYPES
// =============================================================================

/// A product on the boycott list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub reason: String,
    /// Free-form severity label, usually `high`, `medium` or `low`.
    pub severity: String,
    pub category: String,
}

/// A recommended replacement product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default, rename = "tunisian", alias = "isTunisian")]
    pub is_tunisian: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// CATALOG
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    alternatives: Vec<Alternative>,
}

impl Catalog {
    #[must_use]
    pub fn new(products: Vec<Product>, alternatives: Vec<Alternative>) -> Self {
        Self { products, alternatives }
    }

    /// Load both catalog files from `data_dir`, degrading each to empty on failure.
    #[must_use]
    pub fn load(data_dir: &Path) -> Self {
        let products = read_list::<Product>(&data_dir.join(BOYCOTT_FILE)).unwrap_or_else(|e| {
            warn!(error = %e, "boycott list unavailable; serving empty list");
            Vec::new()
        });
        let alternatives = read_list::<Alternative>(&data_dir.join(ALTERNATIVES_FILE)).unwrap_or_else(|e| {
            warn!(error = %e, "alternatives unavailable; serving empty list");
            Vec::new()
        });
        info!(products = products.len(), alternatives = alternatives.len(), "catalog loaded");
        Self::new(products, alternatives)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| same_label(&p.category, category))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn by_severity(&self, severity: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| same_label(&p.severity, severity))
            .cloned()
            .collect()
    }

    /// Distinct boycott categories in sorted order.
    #[must_use]
    pub fn categories(&self) -> BTreeSet<String> {
        self.products.iter().map(|p| p.category.clone()).collect()
    }

    /// Number of boycotted products per category.
    #[must_use]
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for product in &self.products {
            *counts.entry(product.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Boycotted product named `name`, ignoring case and surrounding whitespace.
    pub(crate) fn find_product(&self, name: &str) -> Option<&Product> {
        let needle = name.trim().to_lowercase();
        self.products.iter().find(|p| p.name.to_lowercase() == needle)
    }

    pub(crate) fn find_alternative(&self, name: &str) -> Option<&Alternative> {
        let needle = name.trim().to_lowercase();
        self.alternatives.iter().find(|a| a.name.to_lowercase() == needle)
    }
}

/// Case-insensitive comparison over full Unicode lowercase, so `Hygiène`
/// matches `HYGIÈNE`.
pub(crate) fn same_label(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

fn read_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io { path: path.to_owned(), source })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse { path: path.to_owned(), source })
}
