//! JSON catalog endpoints.
//!
//! Every list endpoint is read-only over the immutable catalog, so responses
//! carry a `Cache-Control` max-age sized to how often the data files change.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::{BTreeMap, BTreeSet};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::http::header::{CACHE_CONTROL, HeaderName};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::check::CheckResult;
use crate::catalog::{Alternative, Product};
use crate::state::AppState;

pub const CACHE_ONE_HOUR: &str = "max-age=3600";
pub const CACHE_ONE_DAY: &str = "max-age=86400";

/// JSON body paired with a `Cache-Control` header.
pub type Cached<T> = ([(HeaderName, &'static str); 1], Json<T>);

fn cached<T>(max_age: &'static str, body: T) -> Cached<T> {
    ([(CACHE_CONTROL, max_age)], Json(body))
}

#[derive(Debug, Deserialize)]
pub struct NameParams {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub query: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_products: usize,
    pub total_alternatives: usize,
    pub categories_count: BTreeMap<String, usize>,
}

/// `GET /api/check?name=`: classify one product name.
///
/// # Errors
///
/// Returns `400 Bad Request` when the name is blank.
pub async fn check(
    State(state): State<AppState>,
    Query(params): Query<NameParams>,
) -> Result<Cached<CheckResult>, StatusCode> {
    if params.name.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let result = state.catalog.check(&params.name, &mut rand::rng());
    debug!(name = %params.name, boycotted = result.is_boycotted, "product checked");
    Ok(cached(CACHE_ONE_HOUR, result))
}

/// `GET /api/boycott-list`
pub async fn boycott_list(State(state): State<AppState>) -> Cached<Vec<Product>> {
    cached(CACHE_ONE_DAY, state.catalog.products().to_vec())
}

/// `GET /api/alternatives`
pub async fn alternatives(State(state): State<AppState>) -> Cached<Vec<Alternative>> {
    cached(CACHE_ONE_DAY, state.catalog.alternatives().to_vec())
}

/// `GET /api/category/{category}`
pub async fn by_category(State(state): State<AppState>, Path(category): Path<String>) -> Cached<Vec<Product>> {
    cached(CACHE_ONE_DAY, state.catalog.by_category(&category))
}

/// `GET /api/severity/{severity}`
pub async fn by_severity(State(state): State<AppState>, Path(severity): Path<String>) -> Cached<Vec<Product>> {
    cached(CACHE_ONE_DAY, state.catalog.by_severity(&severity))
}

/// `GET /api/suggestions?query=`: autocomplete names for the search box.
pub async fn suggestions(State(state): State<AppState>, Query(params): Query<QueryParams>) -> Cached<Vec<String>> {
    cached(CACHE_ONE_HOUR, state.catalog.suggestions(&params.query))
}

/// `GET /api/search?query=`: typo-tolerant product search. Not cached.
pub async fn search(State(state): State<AppState>, Query(params): Query<QueryParams>) -> Json<Vec<Product>> {
    Json(state.catalog.fuzzy_search(&params.query))
}

/// `GET /api/categories`
pub async fn categories(State(state): State<AppState>) -> Cached<BTreeSet<String>> {
    cached(CACHE_ONE_DAY, state.catalog.categories())
}

/// `GET /api/stats`
pub async fn stats(State(state): State<AppState>) -> Cached<Stats> {
    let stats = Stats {
        total_products: state.catalog.products().len(),
        total_alternatives: state.catalog.alternatives().len(),
        categories_count: state.catalog.category_counts(),
    };
    cached(CACHE_ONE_HOUR, stats)
}
