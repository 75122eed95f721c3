//! Social sharing and clipboard access.

use wasm_bindgen_futures::JsFuture;

use crate::util::share::{POPUP_FEATURES, facebook_url, twitter_url, whatsapp_url};

const BLANK: &str = "_blank";

/// Stateless; every method talks to `window` directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShareManager;

impl ShareManager {
    pub fn share_on_facebook(url: &str, text: &str) {
        open_popup(&facebook_url(url, text), Some(POPUP_FEATURES));
    }

    pub fn share_on_twitter(url: &str, text: &str) {
        open_popup(&twitter_url(url, text), Some(POPUP_FEATURES));
    }

    pub fn share_on_whatsapp(text: &str) {
        open_popup(&whatsapp_url(text), None);
    }

    /// Write `text` to the system clipboard. Failures are logged and
    /// reported as `false`.
    pub async fn copy_to_clipboard(text: &str) -> bool {
        let Some(clipboard) = web_sys::window().map(|w| w.navigator().clipboard()) else {
            log::error!("clipboard unavailable");
            return false;
        };
        match JsFuture::from(clipboard.write_text(text)).await {
            Ok(_) => true,
            Err(e) => {
                log::error!("clipboard write failed: {e:?}");
                false
            }
        }
    }
}

fn open_popup(url: &str, features: Option<&str>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let opened = match features {
        Some(features) => window.open_with_url_and_target_and_features(url, BLANK, features),
        None => window.open_with_url_and_target(url, BLANK),
    };
    if let Err(e) = opened {
        log::warn!("share window blocked: {e:?}");
    }
}
