use super::*;

#[test]
fn memory_store_round_trips_strings() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    store.set("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    assert_eq!(store.get("missing"), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let view = store.clone();
    store.set("k", "v");
    assert_eq!(view.get("k").as_deref(), Some("v"));
}

#[test]
fn load_json_ignores_malformed_values() {
    let store = MemoryStore::new();
    store.set("favorites", "{not json");
    assert_eq!(load_json::<_, Vec<String>>(&store, "favorites"), None);
}

#[test]
fn save_json_writes_compact_json() {
    let store = MemoryStore::new();
    save_json(&store, "favorites", &vec!["a".to_owned(), "b".to_owned()]);
    assert_eq!(store.get("favorites").as_deref(), Some(r#"["a","b"]"#));
    assert_eq!(load_json::<_, Vec<String>>(&store, "favorites"), Some(vec!["a".to_owned(), "b".to_owned()]));
}
