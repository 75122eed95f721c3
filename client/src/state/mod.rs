//! Manager state that compiles and tests without a browser.
//!
//! DESIGN
//! ======
//! Each module holds the data rules of one manager (theme value transitions,
//! favorites set operations, search debounce ordering, toast supersession,
//! reveal bookkeeping). The DOM bindings in `components` drive these types
//! and only translate their decisions into `web-sys` calls.

pub mod favorites;
pub mod reveal;
pub mod search;
pub mod theme;
pub mod toast;
