//! One-way scroll reveal bookkeeping.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Elements reveal once their top edge is this far above the viewport bottom.
pub const REVEAL_OFFSET_PX: f64 = 100.0;

/// Selector for elements tracked by the reveal animation.
pub const REVEAL_SELECTOR: &str = ".reveal";

/// Class added to an element once it has been revealed.
pub const REVEALED_CLASS: &str = "active";

#[must_use]
pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_OFFSET_PX
}

/// Tracks which of `n` elements have been revealed. Reveals are never undone.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { revealed: vec![false; count] }
    }

    /// Observe element `index` at `top`. Returns `true` only on the call that
    /// first reveals it.
    pub fn observe(&mut self, index: usize, top: f64, viewport_height: f64) -> bool {
        let Some(slot) = self.revealed.get_mut(index) else {
            return false;
        };
        if *slot || !should_reveal(top, viewport_height) {
            return false;
        }
        *slot = true;
        true
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Indices not yet revealed, in order.
    pub fn pending(&self) -> impl Iterator<Item = usize> + '_ {
        self.revealed
            .iter()
            .enumerate()
            .filter(|(_, done)| !**done)
            .map(|(i, _)| i)
    }
}
