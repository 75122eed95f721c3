//! Single transient toast message.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::state::toast::{DEFAULT_TOAST_MS, TOAST_ID, ToastKind, ToastState};
use crate::util::dom;

#[derive(Clone, Default)]
pub struct ToastNotification {
    state: Rc<RefCell<ToastState>>,
}

impl ToastNotification {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success toast for the default duration.
    pub fn success(&self, message: &str) {
        self.show(message, DEFAULT_TOAST_MS, ToastKind::Success);
    }

    pub fn error(&self, message: &str) {
        self.show(message, DEFAULT_TOAST_MS, ToastKind::Error);
    }

    /// Display `message` for `duration_ms`, replacing whatever is showing.
    pub fn show(&self, message: &str, duration_ms: u32, kind: ToastKind) {
        let Some(toast) = dom::by_id(TOAST_ID).or_else(create_toast) else {
            return;
        };
        toast.set_text_content(Some(message));
        toast.set_class_name(&kind.class_name());

        let generation = self.state.borrow_mut().show();
        let state = Rc::clone(&self.state);
        Timeout::new(duration_ms, move || {
            if state.borrow().should_hide(generation) {
                dom::remove_class(&toast, "show");
            }
        })
        .forget();
    }
}

fn create_toast() -> Option<web_sys::Element> {
    let doc = dom::document()?;
    let toast = doc.create_element("div").ok()?;
    toast.set_id(TOAST_ID);
    toast.set_class_name("toast");
    doc.body()?.append_child(&toast).ok()?;
    Some(toast)
}
