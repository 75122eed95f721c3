//! Autocomplete and typo-tolerant search over catalog names.
//!
//! Suggestions are plain case-insensitive substring hits. Fuzzy search also
//! accepts names within an edit-distance threshold that grows with the
//! query length, and ranks hits by that distance.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use super::{Alternative, Catalog, Product};

/// Queries shorter than this never produce suggestions.
pub const MIN_SUGGESTION_QUERY_CHARS: usize = 2;

/// Upper bound on suggestion and fuzzy-search result counts.
pub const MAX_RESULTS: usize = 5;

impl Catalog {
    /// Boycotted product names containing `query`, case-insensitively.
    #[must_use]
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        if query.chars().count() < MIN_SUGGESTION_QUERY_CHARS {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.products
            .iter()
            .map(|p| p.name.as_str())
            .filter(|name| name.to_lowercase().contains(&needle))
            .take(MAX_RESULTS)
            .map(str::to_owned)
            .collect()
    }

    /// Boycotted products whose names are close to `query`, nearest first.
    #[must_use]
    pub fn fuzzy_search(&self, query: &str) -> Vec<Product> {
        fuzzy_rank(&self.products, |p| &p.name, query).into_iter().cloned().collect()
    }

    /// Alternatives whose names are close to `query`, nearest first.
    #[must_use]
    pub fn fuzzy_search_alternatives(&self, query: &str) -> Vec<Alternative> {
        fuzzy_rank(&self.alternatives, |a| &a.name, query).into_iter().cloned().collect()
    }
}

/// Maximum edit distance tolerated for a query of `len` characters.
#[must_use]
pub fn distance_threshold(len: usize) -> usize {
    match len {
        0..=5 => 1,
        6..=10 => 2,
        _ => 3,
    }
}

fn fuzzy_rank<'a, T>(items: &'a [T], name_of: impl Fn(&T) -> &str, query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let threshold = distance_threshold(query.chars().count());

    let mut hits: Vec<(usize, &T)> = items
        .iter()
        .filter_map(|item| {
            let name = name_of(item).to_lowercase();
            let distance = levenshtein(&name, &needle);
            let substring = name.contains(&needle) || needle.contains(&name);
            (substring || distance <= threshold).then_some((distance, item))
        })
        .collect();
    // Stable sort keeps catalog order between equally distant names.
    hits.sort_by_key(|(distance, _)| *distance);
    hits.into_iter().take(MAX_RESULTS).map(|(_, item)| item).collect()
}

/// Levenshtein edit distance counted in chars.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_chars.len()]
}
