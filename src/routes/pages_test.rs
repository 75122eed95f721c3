use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::IntoResponse;

use super::*;
use crate::catalog::test_helpers::{product, sample_catalog};

fn test_state() -> AppState {
    AppState::new(sample_catalog(), "https://example.org")
}

fn form(name: &str) -> Form<CheckForm> {
    Form(CheckForm { product_name: name.to_owned() })
}

#[tokio::test]
async fn check_blank_name_redirects_home() {
    let response = check(State(test_state()), form("  ")).await.into_response();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/");
}

#[tokio::test]
async fn check_renders_boycott_result() {
    let Html(page) = check(State(test_state()), form("Pepsi")).await.unwrap();
    assert!(page.contains("result-boycotted"));
    assert!(page.contains("<h1>Pepsi</h1>"));
    assert!(page.contains("Ce produit est sur la liste de boycott"));
    assert!(page.contains("Gravité : Élevée"));
    assert!(page.contains(r#"action="/check" method="post""#));
}

#[tokio::test]
async fn check_marks_alternative_safe() {
    let Html(page) = check(State(test_state()), form("boga")).await.unwrap();
    assert!(page.contains("result-safe"));
    assert!(page.contains("Gravité : Sûr"));
}

#[tokio::test]
async fn list_page_renders_every_product() {
    let Html(page) = list(State(test_state())).await;
    assert!(page.contains("5 produits répertoriés"));
    for name in ["Coca-Cola", "Pepsi", "Nestle", "Danone", "Colgate"] {
        assert!(page.contains(&format!("<td>{name}</td>")), "missing {name}");
    }
}

#[tokio::test]
async fn alternatives_page_renders_cards_with_badge() {
    let Html(page) = alternatives(State(test_state())).await;
    assert_eq!(page.matches("<article").count(), 3);
    assert!(page.contains("<h3>Boga <span class=\"badge\">🇹🇳</span></h3>"));
}

#[tokio::test]
async fn about_page_has_title() {
    let Html(page) = about().await;
    assert!(page.contains("<title>À propos | ConsumeSafe</title>"));
}

#[test]
fn catalog_text_is_escaped() {
    let mut hostile = product("<script>x</script>", "high\"", "A&B");
    hostile.reason = "<b>r</b>".to_owned();
    let page = render_list(&[hostile]);
    assert!(!page.contains("<script>x"));
    assert!(page.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(page.contains("A&amp;B"));
    assert!(page.contains("&lt;b&gt;r&lt;/b&gt;"));
    assert!(!page.contains("severity-high\""));
}

#[test]
fn layout_wires_client_bundle_and_theme_toggle() {
    let page = layout("T", "<p>body</p>");
    assert!(page.contains("id=\"themeToggle\""));
    assert!(page.contains("import init, { ConsumeSafe } from \"/pkg/consumesafe_client.js\";"));
    assert!(page.contains("<p>body</p>"));
}
