//! Debounced product autocomplete.
//!
//! DESIGN
//! ======
//! `SearchState` decides; this module only wires it to the page. The pending
//! debounce `Timeout` is owned by the manager and replaced on every
//! keystroke, which cancels the previous one. Fetch results go through
//! `SearchState::accepts` so a slow response for an older query never
//! overwrites the panel for a newer one.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;

use crate::net::api::fetch_suggestions;
use crate::state::search::{
    DEBOUNCE_MS, InputAction, PanelUpdate, SUGGESTION_ITEM_CLASS, SearchState, panel_update,
};
use crate::util::dom::{self, EventListener};

const SHOW_CLASS: &str = "show";
const INPUT_GROUP_SELECTOR: &str = ".input-group";

struct Inner {
    input: web_sys::HtmlInputElement,
    panel: web_sys::Element,
    state: RefCell<SearchState>,
    debounce: RefCell<Option<Timeout>>,
}

pub struct SearchManager {
    inner: Rc<Inner>,
    _listeners: Vec<EventListener>,
}

impl SearchManager {
    /// Bind to the input `input_id` and the suggestion panel `panel_id`.
    /// Returns `None` when either element is missing.
    #[must_use]
    pub fn attach(input_id: &str, panel_id: &str) -> Option<Self> {
        let input = dom::by_id_as::<web_sys::HtmlInputElement>(input_id)?;
        let panel = dom::by_id(panel_id)?;
        let document = dom::document()?;

        let inner = Rc::new(Inner {
            input,
            panel,
            state: RefCell::new(SearchState::default()),
            debounce: RefCell::new(None),
        });

        let mut listeners = Vec::with_capacity(3);
        {
            let inner_ref = Rc::clone(&inner);
            listeners.extend(dom::listen(&inner.input, "input", move |_| handle_input(&inner_ref)));
        }
        {
            let inner_ref = Rc::clone(&inner);
            listeners.extend(dom::listen(&inner.panel, "click", move |ev| {
                handle_suggestion_click(&inner_ref, &ev);
            }));
        }
        {
            let inner_ref = Rc::clone(&inner);
            listeners.extend(dom::listen(&document, "click", move |ev| {
                handle_outside_click(&inner_ref, &ev);
            }));
        }

        Some(Self { inner, _listeners: listeners })
    }

    pub fn hide_suggestions(&self) {
        hide(&self.inner);
    }
}

fn handle_input(inner: &Rc<Inner>) {
    let action = inner.state.borrow_mut().on_input(&inner.input.value());
    match action {
        InputAction::Hide => {
            inner.debounce.borrow_mut().take();
            hide(inner);
        }
        InputAction::Schedule { timer } => {
            let weak: Weak<Inner> = Rc::downgrade(inner);
            let pending = Timeout::new(DEBOUNCE_MS, move || {
                if let Some(inner) = weak.upgrade() {
                    fire(&inner, timer);
                }
            });
            *inner.debounce.borrow_mut() = Some(pending);
        }
    }
}

fn fire(inner: &Rc<Inner>, timer: u64) {
    let Some(request) = inner.state.borrow_mut().on_timer(timer) else {
        return;
    };
    let inner = Rc::clone(inner);
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = fetch_suggestions(&request.query).await;
        if let Err(e) = &outcome {
            log::error!("suggestion fetch failed for {:?}: {e}", request.query);
        }
        if !inner.state.borrow().accepts(request.seq) {
            log::debug!("dropping stale suggestions for {:?}", request.query);
            return;
        }
        match panel_update(&outcome) {
            PanelUpdate::Show(html) => {
                inner.panel.set_inner_html(&html);
                dom::add_class(&inner.panel, SHOW_CLASS);
            }
            PanelUpdate::Hide => hide(&inner),
        }
    });
}

fn handle_suggestion_click(inner: &Rc<Inner>, ev: &web_sys::Event) {
    let Some(item) = dom::event_element(ev)
        .and_then(|el| el.closest(&format!(".{SUGGESTION_ITEM_CLASS}")).ok().flatten())
    else {
        return;
    };
    let value = item.get_attribute("data-value").unwrap_or_default();
    inner.input.set_value(&value);
    inner.state.borrow_mut().dismiss();
    hide(inner);
    if let Some(form) = inner.input.form() {
        if form.submit().is_err() {
            log::warn!("search form submit failed");
        }
    }
}

fn handle_outside_click(inner: &Rc<Inner>, ev: &web_sys::Event) {
    let inside = dom::event_element(ev)
        .and_then(|el| el.closest(INPUT_GROUP_SELECTOR).ok().flatten())
        .is_some();
    if !inside {
        inner.state.borrow_mut().dismiss();
        hide(inner);
    }
}

fn hide(inner: &Inner) {
    dom::remove_class(&inner.panel, SHOW_CLASS);
}

