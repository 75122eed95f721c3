//! Thin `web-sys` lookups shared by the managers.
//!
//! Every helper returns `Option` so a page missing an element simply skips
//! the manager that needs it.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub type EventListener = Closure<dyn FnMut(web_sys::Event)>;

#[must_use]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[must_use]
pub fn body() -> Option<web_sys::HtmlElement> {
    document().and_then(|d| d.body())
}

#[must_use]
pub fn by_id(id: &str) -> Option<web_sys::Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

/// Look up `id` and cast it to a concrete element type.
#[must_use]
pub fn by_id_as<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|el| el.dyn_into::<T>().ok())
}

/// All elements matching `selector`, in document order.
#[must_use]
pub fn query_all(selector: &str) -> Vec<web_sys::Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Wrap `handler` as a JS event listener and attach it to `target`.
///
/// The returned closure must be kept alive for as long as the listener
/// should fire.
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Option<EventListener>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .ok()?;
    Some(cb)
}

/// The element an event was dispatched to, if it is an `Element`.
#[must_use]
pub fn event_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
}

pub fn add_class(el: &web_sys::Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &web_sys::Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}
