//! Reveal `.reveal` elements as they scroll into view.

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::reveal::{REVEAL_SELECTOR, REVEALED_CLASS, RevealTracker};
use crate::util::dom::{self, EventListener};

struct Inner {
    elements: Vec<web_sys::Element>,
    tracker: RefCell<RevealTracker>,
}

pub struct ScrollAnimations {
    inner: Rc<Inner>,
    _on_scroll: Option<EventListener>,
}

impl ScrollAnimations {
    /// Track every `.reveal` element. Returns `None` when there are none.
    #[must_use]
    pub fn attach() -> Option<Self> {
        let elements = dom::query_all(REVEAL_SELECTOR);
        if elements.is_empty() {
            return None;
        }
        let window = web_sys::window()?;
        let inner = Rc::new(Inner { tracker: RefCell::new(RevealTracker::new(elements.len())), elements });

        check(&inner);
        let on_scroll = {
            let inner = Rc::clone(&inner);
            dom::listen(&window, "scroll", move |_| check(&inner))
        };
        Some(Self { inner, _on_scroll: on_scroll })
    }

    /// Re-evaluate element positions immediately.
    pub fn check(&self) {
        check(&self.inner);
    }
}

fn check(inner: &Inner) {
    let Some(viewport_height) = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
    else {
        return;
    };
    let mut tracker = inner.tracker.borrow_mut();
    let pending: Vec<usize> = tracker.pending().collect();
    for index in pending {
        let top = inner.elements[index].get_bounding_client_rect().top();
        if tracker.observe(index, top, viewport_height) {
            dom::add_class(&inner.elements[index], REVEALED_CLASS);
        }
    }
}
