use serde::{Deserialize, Serialize};

/// Cancelable expiry handle for the active highlight.
///
/// A handle only clears the highlight it was issued for; any later
/// `set_highlight` invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightHandle {
    pub token: u64,
    pub expires_at_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveHighlight {
    node_id: String,
    handle: HighlightHandle,
}

/// Single timed highlight keyed by node id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightScheduler {
    active: Option<ActiveHighlight>,
    next_token: u64,
}

impl HighlightScheduler {
    #[must_use]
    pub fn highlighted(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.node_id.as_str())
    }

    #[must_use]
    pub fn handle(&self) -> Option<HighlightHandle> {
        self.active.as_ref().map(|active| active.handle)
    }

    #[must_use]
    pub fn is_highlighted(&self, node_id: &str) -> bool {
        self.highlighted() == Some(node_id)
    }

    /// Replaces any current highlight and arms a fresh expiry.
    pub fn set_highlight(
        &mut self,
        node_id: impl Into<String>,
        now_ms: u64,
        duration_ms: u64,
    ) -> HighlightHandle {
        self.next_token = self.next_token.wrapping_add(1);
        let handle = HighlightHandle {
            token: self.next_token,
            expires_at_ms: now_ms.saturating_add(duration_ms),
        };
        self.active = Some(ActiveHighlight {
            node_id: node_id.into(),
            handle,
        });
        handle
    }

    /// Clears immediately, returning the id that was highlighted.
    pub fn clear_highlight(&mut self) -> Option<String> {
        self.active.take().map(|active| active.node_id)
    }

    /// Clears the highlight if its handle is due at `now_ms`.
    pub fn expire(&mut self, now_ms: u64) -> Option<String> {
        let due = self
            .active
            .as_ref()
            .is_some_and(|active| active.handle.expires_at_ms <= now_ms);
        if due { self.clear_highlight() } else { None }
    }

    /// Timer-fired path: clears only when `handle` is still the active one.
    pub fn fire(&mut self, handle: HighlightHandle) -> Option<String> {
        match &self.active {
            Some(active) if active.handle.token == handle.token => self.clear_highlight(),
            _ => None,
        }
    }
}
