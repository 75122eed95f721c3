//! Theme switching bound to the page.
//!
//! Applies the stored theme as `data-theme` on `<body>`, keeps the
//! `themeIcon`/`themeText` pair in sync, and flips the theme on clicks of
//! `themeToggle`. Missing elements are skipped.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::state::theme::{Theme, ThemePreference};
use crate::util::dom::{self, EventListener};
use crate::util::storage::LocalStorage;

const TRANSITION_MS: u32 = 500;
const TRANSITION_STYLE: &str = "all 0.5s ease";

struct Inner {
    pref: RefCell<ThemePreference<LocalStorage>>,
    transition_reset: RefCell<Option<Timeout>>,
}

pub struct ThemeManager {
    inner: Rc<Inner>,
    _on_click: Option<EventListener>,
}

impl ThemeManager {
    #[must_use]
    pub fn new() -> Self {
        let inner = Rc::new(Inner {
            pref: RefCell::new(ThemePreference::load(LocalStorage)),
            transition_reset: RefCell::new(None),
        });
        let theme = inner.pref.borrow().current();
        apply(theme);

        let on_click = dom::by_id("themeToggle").and_then(|button| {
            let inner = Rc::clone(&inner);
            dom::listen(&button, "click", move |_| {
                toggle_inner(&inner);
            })
        });

        Self { inner, _on_click: on_click }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.inner.pref.borrow().current()
    }

    /// Flip, persist and re-apply the theme.
    pub fn toggle(&self) -> Theme {
        toggle_inner(&self.inner)
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn toggle_inner(inner: &Rc<Inner>) -> Theme {
    let theme = inner.pref.borrow_mut().toggle();
    apply(theme);

    if let Some(body) = dom::body() {
        let _ = body.style().set_property("transition", TRANSITION_STYLE);
        let reset = Timeout::new(TRANSITION_MS, move || {
            let _ = body.style().remove_property("transition");
        });
        // Replacing the timer cancels the previous reset; the newest toggle owns the window.
        *inner.transition_reset.borrow_mut() = Some(reset);
    }
    log::debug!("theme switched to {}", theme.as_str());
    theme
}

fn apply(theme: Theme) {
    if let Some(body) = dom::body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
    if let (Some(icon), Some(text)) = (dom::by_id("themeIcon"), dom::by_id("themeText")) {
        icon.set_text_content(Some(theme.icon()));
        text.set_text_content(Some(theme.label()));
    }
}
