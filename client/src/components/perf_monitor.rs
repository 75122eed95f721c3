//! Development-only page load timing log.

use gloo_timers::callback::Timeout;

use crate::util::dom::{self, EventListener};
use crate::util::perf::{is_dev_host, page_load_ms};

pub struct PerformanceMonitor {
    _on_load: EventListener,
}

impl PerformanceMonitor {
    /// Log the page load time once the window `load` event completes.
    /// Only active on the development host.
    #[must_use]
    pub fn attach() -> Option<Self> {
        let window = web_sys::window()?;
        let hostname = window.location().hostname().ok()?;
        if !is_dev_host(&hostname) {
            return None;
        }
        let on_load = dom::listen(&window, "load", |_| {
            // loadEventEnd is still 0 inside the load handler; read it on the next tick.
            Timeout::new(0, log_page_load).forget();
        })?;
        Some(Self { _on_load: on_load })
    }
}

fn log_page_load() {
    let Some(timing) = web_sys::window().and_then(|w| w.performance()).map(|p| p.timing()) else {
        return;
    };
    let elapsed = page_load_ms(timing.navigation_start(), timing.load_event_end());
    log::info!("📊 Temps de chargement: {elapsed}ms");
}
