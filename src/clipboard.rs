//! Copy-to-clipboard acknowledgment.
//!
//! A copy button briefly swaps its content for "Copied!" (or a failure
//! message) and then restores it. Rapid clicks restart the timer: a reset
//! scheduled by an older click is ignored.

/// Pick the text a copy button copies: its literal attribute value, else the
/// text of its target element, else the page's canonical URL. Empty
/// candidates are skipped; later sources are only queried when needed.
pub fn copy_text(
    literal: Option<String>,
    target_text: impl FnOnce() -> Option<String>,
    canonical_url: impl FnOnce() -> Option<String>,
) -> Option<String> {
    let non_empty = |text: Option<String>| text.filter(|t| !t.trim().is_empty());
    non_empty(literal)
        .or_else(|| non_empty(target_text()))
        .or_else(|| non_empty(canonical_url()))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    state: CopyState,
    generation: u64,
}

impl CopyFeedback {
    pub fn state(&self) -> CopyState {
        self.state
    }

    /// Record the outcome of a copy. Returns the generation to pass to
    /// [`CopyFeedback::reset`] when the acknowledgment timer fires.
    pub fn finish(&mut self, ok: bool) -> u64 {
        self.state = if ok { CopyState::Copied } else { CopyState::Failed };
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Return to idle if no newer copy happened. Returns whether it reset.
    pub fn reset(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.state == CopyState::Idle {
            return false;
        }
        self.state = CopyState::Idle;
        true
    }

    /// Label to show for the current state; `None` means the original label.
    pub fn label<'a>(&self, copied: &'a str, failed: &'a str) -> Option<&'a str> {
        match self.state {
            CopyState::Idle => None,
            CopyState::Copied => Some(copied),
            CopyState::Failed => Some(failed),
        }
    }
}

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod tests;
