//! File-download helpers for client-side exports.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Prefix of the favorites export file name.
pub const FAVORITES_EXPORT_PREFIX: &str = "consumesafe-favoris-";

/// `consumesafe-favoris-<YYYY-MM-DD>.json`, taking the date from the first
/// ten characters of an ISO-8601 timestamp.
#[must_use]
pub fn favorites_export_file_name(iso_timestamp: &str) -> String {
    let date: String = iso_timestamp.chars().take(10).collect();
    format!("{FAVORITES_EXPORT_PREFIX}{date}.json")
}

/// A `data:` URI carrying `json` as a UTF-8 `application/json` document.
#[must_use]
pub fn json_data_uri(json: &str) -> String {
    format!("data:application/json;charset=utf-8,{}", urlencoding::encode(json))
}

/// Trigger a browser download of `href` through a synthetic anchor click.
#[cfg(feature = "hydrate")]
pub fn trigger_download(href: &str, file_name: &str) {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(anchor) = doc
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok())
    else {
        return;
    };
    anchor.set_href(href);
    anchor.set_download(file_name);
    anchor.click();
}
