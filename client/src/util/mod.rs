//! Utility helpers shared across client managers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from manager logic
//! to improve reuse and testability. Everything here except `dom` compiles
//! natively.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod download;
pub mod html;
pub mod perf;
pub mod share;
pub mod storage;
