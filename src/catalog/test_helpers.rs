//! Shared catalog fixtures for unit tests.

use super::{Alternative, Catalog, Product};

pub(crate) fn product(name: &str, severity: &str, category: &str) -> Product {
    Product {
        name: name.to_owned(),
        reason: format!("{name} reason"),
        severity: severity.to_owned(),
        category: category.to_owned(),
    }
}

pub(crate) fn alternative(name: &str, category: &str) -> Alternative {
    Alternative {
        name: name.to_owned(),
        description: format!("{name} description"),
        category: category.to_owned(),
        is_tunisian: true,
    }
}

pub(crate) fn sample_catalog() -> Catalog {
    Catalog::new(
        vec![
            product("Coca-Cola", "high", "Boissons"),
            product("Pepsi", "high", "Boissons"),
            product("Nestle", "medium", "Alimentation"),
            product("Danone", "low", "Alimentation"),
            product("Colgate", "medium", "Hygiene"),
        ],
        vec![
            alternative("Boga", "Boissons"),
            alternative("Safia", "Boissons"),
            alternative("Vitalait", "Alimentation"),
        ],
    )
}
