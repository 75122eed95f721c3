use super::*;
use crate::catalog::test_helpers::sample_catalog;

fn test_state() -> AppState {
    AppState::new(sample_catalog(), "https://example.org")
}

fn cache_header<T>(response: &Cached<T>) -> &'static str {
    let [(name, value)] = &response.0;
    assert_eq!(*name, CACHE_CONTROL);
    *value
}

#[tokio::test]
async fn check_rejects_blank_name() {
    let result = check(State(test_state()), Query(NameParams { name: "   ".into() })).await;
    assert_eq!(result.unwrap_err(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn check_returns_cached_result() {
    let response = check(State(test_state()), Query(NameParams { name: "Pepsi".into() }))
        .await
        .unwrap();
    assert_eq!(cache_header(&response), CACHE_ONE_HOUR);
    assert!(response.1.0.is_boycotted);
}

#[tokio::test]
async fn suggestions_use_catalog_and_hour_cache() {
    let response = suggestions(State(test_state()), Query(QueryParams { query: "co".into() })).await;
    assert_eq!(cache_header(&response), CACHE_ONE_HOUR);
    assert_eq!(response.1.0, vec!["Coca-Cola", "Colgate"]);
}

#[tokio::test]
async fn suggestions_short_query_is_empty() {
    let response = suggestions(State(test_state()), Query(QueryParams { query: "c".into() })).await;
    assert!(response.1.0.is_empty());
}

#[tokio::test]
async fn list_endpoints_cache_for_a_day() {
    let state = test_state();
    let products = boycott_list(State(state.clone())).await;
    assert_eq!(cache_header(&products), CACHE_ONE_DAY);
    assert_eq!(products.1.0.len(), 5);

    let alts = alternatives(State(state.clone())).await;
    assert_eq!(alts.1.0.len(), 3);

    let drinks = by_category(State(state.clone()), Path("BOISSONS".into())).await;
    assert_eq!(drinks.1.0.len(), 2);

    let high = by_severity(State(state.clone()), Path("high".into())).await;
    assert_eq!(high.1.0.len(), 2);

    let cats = categories(State(state)).await;
    assert_eq!(cats.1.0.len(), 3);
}

#[tokio::test]
async fn search_is_fuzzy() {
    let Json(hits) = search(State(test_state()), Query(QueryParams { query: "colgat".into() })).await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Colgate");
}

#[tokio::test]
async fn stats_serialize_camel_case() {
    let response = stats(State(test_state())).await;
    let json = serde_json::to_value(&response.1.0).unwrap();
    assert_eq!(json["totalProducts"], 5);
    assert_eq!(json["totalAlternatives"], 3);
    assert_eq!(json["categoriesCount"]["Alimentation"], 2);
}
