//! Page bootstrap and the JS-facing handle.
//!
//! `bootstrap` constructs every manager explicitly and hands them back in one
//! `App` value. Nothing is stored in Rust globals: the page script creates a
//! `ConsumeSafe` handle and decides where to keep it.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;

use crate::components::favorites::FavoritesManager;
use crate::components::lazy_images::LazyLoader;
use crate::components::perf_monitor::PerformanceMonitor;
use crate::components::scroll_reveal::ScrollAnimations;
use crate::components::search_box::SearchManager;
use crate::components::share::ShareManager;
use crate::components::theme_toggle::ThemeManager;
use crate::components::toast::ToastNotification;
use crate::state::toast::{DEFAULT_TOAST_MS, ToastKind};
use crate::util::dom;

const SEARCH_INPUT_ID: &str = "productInput";
const SUGGESTIONS_ID: &str = "suggestions";
const LOADER_ID: &str = "loader";
const LOADER_DELAY_MS: u32 = 1000;

/// Every manager for the current page. Optional managers are `None` when
/// their elements are absent.
pub struct App {
    pub theme: ThemeManager,
    pub favorites: FavoritesManager,
    pub toast: ToastNotification,
    pub search: Option<SearchManager>,
    pub scroll: Option<ScrollAnimations>,
    pub lazy: Option<LazyLoader>,
    pub perf: Option<PerformanceMonitor>,
}

/// Construct all managers against the current document.
#[must_use]
pub fn bootstrap() -> App {
    let app = App {
        theme: ThemeManager::new(),
        favorites: FavoritesManager::new(),
        toast: ToastNotification::new(),
        search: SearchManager::attach(SEARCH_INPUT_ID, SUGGESTIONS_ID),
        scroll: ScrollAnimations::attach(),
        lazy: LazyLoader::attach(),
        perf: PerformanceMonitor::attach(),
    };
    hide_loader_later();

    log::debug!(
        "bootstrapped: search={} scroll={} lazy={} perf={}",
        app.search.is_some(),
        app.scroll.is_some(),
        app.lazy.is_some(),
        app.perf.is_some()
    );
    app
}

fn hide_loader_later() {
    let Some(loader) = dom::by_id(LOADER_ID) else {
        return;
    };
    Timeout::new(LOADER_DELAY_MS, move || dom::add_class(&loader, "hidden")).forget();
}

// =============================================================================
// JS HANDLE
// =============================================================================

/// Handle exported to page scripts: `window.consumeSafe = new ConsumeSafe()`.
#[wasm_bindgen]
pub struct ConsumeSafe {
    app: App,
}

#[wasm_bindgen]
impl ConsumeSafe {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self { app: bootstrap() }
    }

    /// Returns the new theme, `"dark"` or `"light"`.
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&self) -> String {
        self.app.theme.toggle().as_str().to_owned()
    }

    #[wasm_bindgen(js_name = addFavorite)]
    pub fn add_favorite(&mut self, item: &str) -> bool {
        self.app.favorites.add(item)
    }

    #[wasm_bindgen(js_name = removeFavorite)]
    pub fn remove_favorite(&mut self, item: &str) -> bool {
        self.app.favorites.remove(item)
    }

    #[wasm_bindgen(js_name = toggleFavorite)]
    pub fn toggle_favorite(&mut self, item: &str) -> bool {
        self.app.favorites.toggle(item)
    }

    #[wasm_bindgen(js_name = isFavorite)]
    pub fn is_favorite(&self, item: &str) -> bool {
        self.app.favorites.has(item)
    }

    #[wasm_bindgen(js_name = favorites)]
    pub fn favorites(&self) -> Vec<String> {
        self.app.favorites.get_all()
    }

    #[wasm_bindgen(js_name = clearFavorites)]
    pub fn clear_favorites(&mut self) {
        self.app.favorites.clear();
    }

    #[wasm_bindgen(js_name = exportFavorites)]
    pub fn export_favorites(&self) {
        self.app.favorites.export();
    }

    /// Show a toast. `kind` is `success` (default), `error`, `warning` or `info`.
    #[wasm_bindgen(js_name = showToast)]
    pub fn show_toast(&self, message: &str, duration_ms: Option<u32>, kind: Option<String>) {
        let kind = kind.as_deref().and_then(ToastKind::parse).unwrap_or_default();
        self.app.toast.show(message, duration_ms.unwrap_or(DEFAULT_TOAST_MS), kind);
    }

    #[wasm_bindgen(js_name = shareOnFacebook)]
    pub fn share_on_facebook(url: &str, text: &str) {
        ShareManager::share_on_facebook(url, text);
    }

    #[wasm_bindgen(js_name = shareOnTwitter)]
    pub fn share_on_twitter(url: &str, text: &str) {
        ShareManager::share_on_twitter(url, text);
    }

    #[wasm_bindgen(js_name = shareOnWhatsApp)]
    pub fn share_on_whatsapp(text: &str) {
        ShareManager::share_on_whatsapp(text);
    }

    #[wasm_bindgen(js_name = copyToClipboard)]
    pub async fn copy_to_clipboard(text: String) -> bool {
        ShareManager::copy_to_clipboard(&text).await
    }
}

impl Default for ConsumeSafe {
    fn default() -> Self {
        Self::new()
    }
}
