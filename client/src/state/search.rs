//! Search-suggestion debounce and request ordering.
//!
//! DESIGN
//! ======
//! The browser side owns the actual timer and fetch; this state decides what
//! they are allowed to do. Each keystroke supersedes the pending timer, and
//! each fetch gets a sequence number so only the newest response may touch
//! the suggestion panel. Responses that resolve out of order are dropped.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::fmt::Write as _;

use crate::util::html::escape_html;

/// Trimmed queries shorter than this never reach the network.
pub const MIN_QUERY_CHARS: usize = 2;

/// Quiet period after the last keystroke before a fetch is issued.
pub const DEBOUNCE_MS: u32 = 300;

/// Class on each rendered suggestion row.
pub const SUGGESTION_ITEM_CLASS: &str = "suggestion-item";

/// What the input handler should do after a keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Hide the panel; nothing is scheduled.
    Hide,
    /// Arm the debounce timer with this id.
    Schedule { timer: u64 },
}

/// A fetch cleared to go out, tagged with its sequence number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub seq: u64,
    pub query: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingQuery {
    timer: u64,
    query: String,
}

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pending: Option<PendingQuery>,
    next_timer: u64,
    latest_seq: u64,
}

impl SearchState {
    /// Record a keystroke with the input's raw value.
    ///
    /// Any pending timer is superseded. Short queries also invalidate
    /// in-flight fetches so a late response cannot reopen the panel.
    pub fn on_input(&mut self, raw: &str) -> InputAction {
        let query = raw.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            self.pending = None;
            self.latest_seq += 1;
            return InputAction::Hide;
        }
        self.next_timer += 1;
        self.pending = Some(PendingQuery { timer: self.next_timer, query: query.to_owned() });
        InputAction::Schedule { timer: self.next_timer }
    }

    /// Debounce timer `timer` elapsed. Returns the request to send, if that
    /// timer is still the pending one.
    pub fn on_timer(&mut self, timer: u64) -> Option<SuggestionRequest> {
        if self.pending.as_ref().map(|p| p.timer) != Some(timer) {
            return None;
        }
        let pending = self.pending.take()?;
        self.latest_seq += 1;
        Some(SuggestionRequest { seq: self.latest_seq, query: pending.query })
    }

    /// Whether a response for `seq` is still the newest and may be shown.
    #[must_use]
    pub fn accepts(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    /// Drop pending work and outstanding responses (outside click, selection).
    pub fn dismiss(&mut self) {
        self.pending = None;
        self.latest_seq += 1;
    }
}

/// How the panel should look once a fetch settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelUpdate {
    Show(String),
    Hide,
}

/// Map a fetch outcome to a panel update. Empty lists and errors hide it.
#[must_use]
pub fn panel_update(outcome: &Result<Vec<String>, String>) -> PanelUpdate {
    match outcome {
        Ok(items) if !items.is_empty() => PanelUpdate::Show(render_suggestions(items)),
        _ => PanelUpdate::Hide,
    }
}

/// Suggestion rows with every value HTML-escaped.
#[must_use]
pub fn render_suggestions(items: &[String]) -> String {
    let mut html = String::new();
    for item in items {
        let escaped = escape_html(item);
        let _ = write!(
            html,
            r#"<div class="{SUGGESTION_ITEM_CLASS}" data-value="{escaped}">{escaped}</div>"#
        );
    }
    html
}
