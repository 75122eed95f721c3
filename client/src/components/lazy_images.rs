//! Defer `img[data-src]` loading until the image nears the viewport.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::util::dom;

const LAZY_SELECTOR: &str = "img[data-src]";
const LOADED_CLASS: &str = "loaded";

pub struct LazyLoader {
    _observer: Option<web_sys::IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>>,
}

impl LazyLoader {
    /// Observe every lazy image. Without `IntersectionObserver` support all
    /// images load immediately. Returns `None` when the page has none.
    #[must_use]
    pub fn attach() -> Option<Self> {
        let images: Vec<web_sys::HtmlImageElement> = dom::query_all(LAZY_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web_sys::HtmlImageElement>().ok())
            .collect();
        if images.is_empty() {
            return None;
        }

        let supported = web_sys::window()
            .is_some_and(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false));
        if !supported {
            for img in &images {
                swap_source(img);
            }
            return Some(Self { _observer: None, _callback: None });
        }

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(img) = target.dyn_ref::<web_sys::HtmlImageElement>() {
                        swap_source(img);
                        dom::add_class(img, LOADED_CLASS);
                    }
                    observer.unobserve(&target);
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let observer = web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
        for img in &images {
            observer.observe(img);
        }
        Some(Self { _observer: Some(observer), _callback: Some(callback) })
    }
}

fn swap_source(img: &web_sys::HtmlImageElement) {
    if let Some(src) = img.get_attribute("data-src") {
        img.set_src(&src);
    }
}
