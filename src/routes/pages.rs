//! Server-rendered HTML pages: boycott list, alternatives, about, and the
//! result of a form check.
//!
//! DESIGN
//! ======
//! Every page is a pure `render_*` function over catalog data wrapped in one
//! shared layout, and the handlers only pick the data. The layout carries the
//! theme toggle, the loader and the WASM bundle so browser helpers run on
//! every page. All catalog text goes through `html_escape` before it reaches
//! the markup.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use std::fmt::Write as _;

use axum::Form;
use axum::extract::State;
use axum::response::{Html, Redirect};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Deserialize;
use tracing::debug;

use crate::catalog::check::CheckResult;
use crate::catalog::{Alternative, Product};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckForm {
    #[serde(default)]
    pub product_name: String,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /check`: classify the submitted name and render the result page.
///
/// # Errors
///
/// Redirects to `/` when the submitted name is blank.
pub async fn check(State(state): State<AppState>, Form(form): Form<CheckForm>) -> Result<Html<String>, Redirect> {
    if form.product_name.trim().is_empty() {
        return Err(Redirect::to("/"));
    }
    let result = state.catalog.check(&form.product_name, &mut rand::rng());
    debug!(name = %form.product_name, boycotted = result.is_boycotted, "product checked from form");
    Ok(Html(render_result(&result)))
}

/// `GET /list`
pub async fn list(State(state): State<AppState>) -> Html<String> {
    Html(render_list(state.catalog.products()))
}

/// `GET /alternatives`
pub async fn alternatives(State(state): State<AppState>) -> Html<String> {
    Html(render_alternatives(state.catalog.alternatives()))
}

/// `GET /about`
pub async fn about() -> Html<String> {
    Html(render_about())
}

// =============================================================================
// RENDERING
// =============================================================================

const CHECK_FORM: &str = r#"<form action="/check" method="post" class="reveal">
      <div class="input-group">
        <input id="productInput" name="productName" autocomplete="off" placeholder="Nom du produit"/>
        <div id="suggestions" class="suggestions"></div>
      </div>
      <button type="submit">Vérifier</button>
    </form>"#;

const ABOUT_BODY: &str = r#"<section class="about reveal">
      <h1>À propos de ConsumeSafe</h1>
      <p>ConsumeSafe aide les consommateurs tunisiens à vérifier si un produit figure sur la liste de boycott et propose des alternatives locales.</p>
      <p>Les données sont tenues à jour à partir de sources publiques. Un produit absent de la liste n'est pas forcément sûr : vérifiez toujours l'origine du fabricant.</p>
      <p>🇹🇳 Soutenir les produits tunisiens, c'est soutenir l'économie locale.</p>
    </section>"#;

/// Wrap `body` in the shared page chrome.
#[must_use]
pub fn layout(title: &str, body: &str) -> String {
    let title = encode_text(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1"/>
  <title>{title} | ConsumeSafe</title>
  <style>.multiline {{ white-space: pre-line; }}</style>
</head>
<body data-theme="dark">
  <div id="loader" class="loader"></div>
  <header>
    <nav>
      <a href="/">Accueil</a>
      <a href="/list">Liste de boycott</a>
      <a href="/alternatives">Alternatives</a>
      <a href="/about">À propos</a>
    </nav>
    <button id="themeToggle" type="button">
      <span id="themeIcon">🌙</span>
      <span id="themeText">Sombre</span>
    </button>
  </header>
  <main>
    {body}
  </main>
  <script type="module">
    import init, {{ ConsumeSafe }} from "/pkg/consumesafe_client.js";
    await init();
    window.consumeSafe = new ConsumeSafe();
  </script>
</body>
</html>
"#
    )
}

/// French label for a severity value; unknown values pass through.
fn severity_label(severity: &str) -> &str {
    match severity {
        "high" => "Élevée",
        "medium" => "Moyenne",
        "low" => "Faible",
        "safe" => "Sûr",
        "unknown" => "Inconnue",
        other => other,
    }
}

#[must_use]
pub fn render_list(products: &[Product]) -> String {
    let mut body = format!(
        "<h1>Liste de boycott</h1>\n    <p>{} produits répertoriés</p>\n    <table class=\"boycott-list\">\n      \
         <tr><th>Produit</th><th>Catégorie</th><th>Gravité</th><th>Raison</th></tr>\n",
        products.len()
    );
    for product in products {
        let _ = writeln!(
            body,
            "      <tr class=\"reveal\"><td>{}</td><td>{}</td><td class=\"severity-{}\">{}</td><td>{}</td></tr>",
            encode_text(&product.name),
            encode_text(&product.category),
            encode_double_quoted_attribute(&product.severity),
            encode_text(severity_label(&product.severity)),
            encode_text(&product.reason),
        );
    }
    body.push_str("    </table>");
    layout("Liste de boycott", &body)
}

#[must_use]
pub fn render_alternatives(alternatives: &[Alternative]) -> String {
    let mut body = String::from("<h1>Alternatives tunisiennes</h1>\n    <div class=\"alternatives\">\n");
    for alt in alternatives {
        let badge = if alt.is_tunisian { " <span class=\"badge\">🇹🇳</span>" } else { "" };
        let _ = writeln!(
            body,
            "      <article class=\"card reveal\" data-category=\"{}\">\n        <h3>{}{badge}</h3>\n        \
             <p class=\"category\">{}</p>\n        <p>{}</p>\n      </article>",
            encode_double_quoted_attribute(&alt.category),
            encode_text(&alt.name),
            encode_text(&alt.category),
            encode_text(&alt.description),
        );
    }
    body.push_str("    </div>");
    layout("Alternatives", &body)
}

#[must_use]
pub fn render_about() -> String {
    layout("À propos", ABOUT_BODY)
}

#[must_use]
pub fn render_result(result: &CheckResult) -> String {
    let status = if result.is_boycotted {
        "boycotted"
    } else if result.product_found {
        "safe"
    } else {
        "unknown"
    };
    let mut body = format!(
        "<section class=\"result result-{status} reveal\">\n      <h1>{}</h1>\n      \
         <p class=\"severity severity-{}\">Gravité : {}</p>\n",
        encode_text(result.product_name.trim()),
        encode_double_quoted_attribute(&result.severity),
        encode_text(severity_label(&result.severity)),
    );
    for (class, text) in [
        ("message", &result.message),
        ("reason", &result.reason),
        ("suggestion", &result.suggestion),
    ] {
        if let Some(text) = text {
            let _ = writeln!(body, "      <p class=\"{class} multiline\">{}</p>", encode_text(text));
        }
    }
    body.push_str("    </section>\n    ");
    body.push_str(CHECK_FORM);
    layout("Résultat", &body)
}
