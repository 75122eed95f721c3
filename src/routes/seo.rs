//! Search-engine documents: `sitemap.xml` and `robots.txt`.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

use std::fmt::Write as _;

use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, HeaderName};

use crate::state::AppState;

/// Public pages listed in the sitemap: path, change frequency, priority.
pub(crate) const SITEMAP_PAGES: &[(&str, &str, &str)] = &[
    ("/", "daily", "1.0"),
    ("/list", "weekly", "0.9"),
    ("/alternatives", "weekly", "0.9"),
    ("/about", "monthly", "0.7"),
];

type TextResponse = ([(HeaderName, &'static str); 1], String);

/// Render the sitemap with every page stamped `lastmod = date`.
#[must_use]
pub fn sitemap_xml(base_url: &str, date: &str) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for (path, changefreq, priority) in SITEMAP_PAGES {
        let _ = write!(
            xml,
            "  <url>\n    <loc>{base_url}{path}</loc>\n    <lastmod>{date}</lastmod>\n    \
             <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>\n"
        );
    }
    xml.push_str("</urlset>");
    xml
}

#[must_use]
pub fn robots_txt(base_url: &str) -> String {
    format!("User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {base_url}/sitemap.xml\n")
}

/// `GET /sitemap.xml`
pub async fn sitemap(State(state): State<AppState>) -> TextResponse {
    let today = time::OffsetDateTime::now_utc().date().to_string();
    ([(CONTENT_TYPE, "application/xml")], sitemap_xml(&state.site_base_url, &today))
}

/// `GET /robots.txt`
pub async fn robots(State(state): State<AppState>) -> TextResponse {
    ([(CONTENT_TYPE, "text/plain; charset=utf-8")], robots_txt(&state.site_base_url))
}
