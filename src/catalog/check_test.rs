use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::catalog::test_helpers::{alternative, product, sample_catalog};

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn boycotted_product_is_flagged_with_its_severity() {
    let result = sample_catalog().check("  pepsi ", &mut rng());
    assert!(result.is_boycotted);
    assert!(result.product_found);
    assert_eq!(result.severity, "high");
    assert_eq!(result.reason.as_deref(), Some("Pepsi reason"));
    assert_eq!(result.message.as_deref(), Some(MSG_BOYCOTTED));
    assert_eq!(result.product_name, "  pepsi ");
}

#[test]
fn boycotted_product_suggests_same_category_alternative() {
    let result = sample_catalog().check("Coca-Cola", &mut rng());
    let suggestion = result.suggestion.unwrap();
    assert!(
        suggestion == "Boga - Boga description" || suggestion == "Safia - Safia description",
        "unexpected suggestion: {suggestion}"
    );
}

#[test]
fn boycotted_product_without_alternatives_has_no_suggestion() {
    let result = sample_catalog().check("Colgate", &mut rng());
    assert!(result.is_boycotted);
    assert!(result.suggestion.is_none());
}

#[test]
fn alternative_is_reported_safe() {
    let result = sample_catalog().check("boga", &mut rng());
    assert!(!result.is_boycotted);
    assert!(result.product_found);
    assert_eq!(result.severity, SEVERITY_SAFE);
    assert!(result.reason.unwrap().starts_with("🇹🇳 Boga description"));
    let suggestion = result.suggestion.unwrap();
    assert!(suggestion.contains("Safia - Safia description"), "unexpected suggestion: {suggestion}");
}

#[test]
fn lone_alternative_gets_encouragement() {
    let result = sample_catalog().check("Vitalait", &mut rng());
    assert_eq!(result.suggestion.as_deref(), Some(SUGGESTION_KEEP_GOING));
}

#[test]
fn near_miss_lists_did_you_mean_hints() {
    let result = sample_catalog().check("Pepsy", &mut rng());
    assert!(!result.is_boycotted);
    assert!(!result.product_found);
    assert_eq!(result.severity, SEVERITY_UNKNOWN);
    let message = result.message.unwrap();
    assert!(message.starts_with(MSG_DID_YOU_MEAN));
    assert!(message.contains("Pepsi"));
    assert_eq!(result.reason.as_deref(), Some(REASON_NOT_FOUND));
}

#[test]
fn did_you_mean_caps_each_list_at_two_names() {
    let catalog = Catalog::new(
        vec![product("Brand A", "low", "X"), product("Brand B", "low", "X"), product("Brand C", "low", "X")],
        Vec::new(),
    );
    let message = catalog.check("brand", &mut rng()).message.unwrap();
    assert!(message.contains("Brand A, Brand B"));
    assert!(!message.contains("Brand C"));
}

#[test]
fn unknown_product_gets_general_tip() {
    let catalog = Catalog::new(Vec::new(), vec![alternative("Boga", "Boissons")]);
    let result = catalog.check("Zzzzzzzzzz", &mut rng());
    assert_eq!(result.message.as_deref(), Some(MSG_UNKNOWN));
    assert_eq!(result.reason.as_deref(), Some(REASON_UNKNOWN));
    assert_eq!(
        result.suggestion.as_deref(),
        Some("💡 Conseil : Privilégiez les produits tunisiens comme Boga - Boga description")
    );
}

#[test]
fn check_result_json_keys_match_public_api() {
    let json = serde_json::to_value(sample_catalog().check("Pepsi", &mut rng())).unwrap();
    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["boycotted", "message", "productName", "reason", "severity", "suggestion"]);
    assert_eq!(json["productName"], "Pepsi");
    assert_eq!(json["boycotted"], true);
}

#[test]
fn boycotted_suggestion_matches_category_beyond_ascii() {
    let catalog = Catalog::new(
        vec![product("Colgate", "medium", "Hygiène")],
        vec![alternative("Sanitex", "HYGIÈNE")],
    );
    let result = catalog.check("Colgate", &mut rng());
    assert!(result.suggestion.unwrap().starts_with("Sanitex - "));
}
