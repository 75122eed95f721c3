//! Social share link builders.
//!
//! Pure string construction; opening the links lives in
//! `components::share` so these stay testable off the browser.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use urlencoding::encode;

/// Window features for the Facebook and Twitter share popups.
pub const POPUP_FEATURES: &str = "width=600,height=400";

#[must_use]
pub fn facebook_url(url: &str, text: &str) -> String {
    format!(
        "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
        encode(url),
        encode(text)
    )
}

#[must_use]
pub fn twitter_url(url: &str, text: &str) -> String {
    format!("https://twitter.com/intent/tweet?url={}&text={}", encode(url), encode(text))
}

#[must_use]
pub fn whatsapp_url(text: &str) -> String {
    format!("https://wa.me/?text={}", encode(text))
}
