//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! JSON catalog endpoints live under `/api` with permissive CORS. Rendered
//! pages, SEO documents and the health check sit at the root, and every other
//! path falls through to the static site (home page, CSS and the WASM bundle).


pub mod api;
pub mod pages;
pub mod seo;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/check", get(api::check))
        .route("/api/boycott-list", get(api::boycott_list))
        .route("/api/alternatives", get(api::alternatives))
        .route("/api/category/{category}", get(api::by_category))
        .route("/api/severity/{severity}", get(api::by_severity))
        .route("/api/suggestions", get(api::suggestions))
        .route("/api/search", get(api::search))
        .route("/api/categories", get(api::categories))
        .route("/api/stats", get(api::stats))
        .layer(cors)
}

fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/check", post(pages::check))
        .route("/list", get(pages::list))
        .route("/alternatives", get(pages::alternatives))
        .route("/about", get(pages::about))
}

/// Full application router: API, pages, SEO documents, and the static site fallback.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let site = ServeDir::new(static_dir).append_index_html_on_directories(true);

    api_routes()
        .merge(page_routes())
        .route("/sitemap.xml", get(seo::sitemap))
        .route("/robots.txt", get(seo::robots))
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
