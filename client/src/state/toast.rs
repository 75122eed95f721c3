//! Toast notification state.
//!
//! There is one toast element and no queue. Each `show` bumps a generation
//! counter; a hide timer only applies if its generation is still current,
//! so an older timer cannot cut a newer message short.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const DEFAULT_TOAST_MS: u32 = 3000;
pub const TOAST_ID: &str = "toast";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// Full class attribute for a visible toast of this kind.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("toast {} show", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ToastState {
    generation: u64,
}

impl ToastState {
    /// Register a new message and return its generation.
    pub fn show(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether the hide timer for `generation` should still hide the toast.
    #[must_use]
    pub fn should_hide(&self, generation: u64) -> bool {
        generation == self.generation
    }
}
