//! DOM-bound managers, one per page behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules only exist in the `hydrate` build. Each one looks up the
//! elements it needs, skips itself when they are absent, and owns the
//! listener closures it registers so they live exactly as long as it does.

pub mod favorites;
pub mod lazy_images;
pub mod perf_monitor;
pub mod scroll_reveal;
pub mod search_box;
pub mod share;
pub mod theme_toggle;
pub mod toast;
