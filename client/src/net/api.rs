//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! UI behavior (the suggestion panel hides) without breaking the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
fn suggestions_endpoint(query: &str) -> String {
    format!("/api/suggestions?query={}", urlencoding::encode(query))
}

#[cfg(any(test, feature = "hydrate"))]
fn suggestions_failed_message(status: u16) -> String {
    format!("suggestions request failed: {status}")
}

/// Fetch autocomplete suggestions for `query` from `/api/suggestions`.
///
/// # Errors
///
/// Returns an error string on network failure, a non-2xx status, or a body
/// that is not a JSON array of strings.
pub async fn fetch_suggestions(query: &str) -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&suggestions_endpoint(query))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(suggestions_failed_message(resp.status()));
        }
        resp.json::<Vec<String>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available outside the browser".to_owned())
    }
}
