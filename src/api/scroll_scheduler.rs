use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// Side effect the host must perform, delivered by `advance_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewCommand {
    /// Scroll the node's anchor to the vertical center of the list.
    ScrollNodeIntoView {
        node_id: String,
        behavior: ScrollBehavior,
    },
    /// The highlight on `node_id` ran out.
    HighlightExpired { node_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledScroll {
    pub node_id: String,
    pub behavior: ScrollBehavior,
    pub due_at_ms: u64,
}

/// Deferred scroll-into-view requests.
///
/// At most one node scroll is pending: a newer navigation supersedes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollScheduler {
    pending: Option<ScheduledScroll>,
}

impl ScrollScheduler {
    #[must_use]
    pub fn pending(&self) -> Option<&ScheduledScroll> {
        self.pending.as_ref()
    }

    pub fn schedule(&mut self, node_id: impl Into<String>, behavior: ScrollBehavior, due_at_ms: u64) {
        self.pending = Some(ScheduledScroll {
            node_id: node_id.into(),
            behavior,
            due_at_ms,
        });
    }

    pub fn cancel(&mut self) -> Option<ScheduledScroll> {
        self.pending.take()
    }

    /// Hands out the pending scroll once `now_ms` reaches its due time.
    pub fn take_due(&mut self, now_ms: u64) -> Option<ViewCommand> {
        if self.pending.as_ref()?.due_at_ms > now_ms {
            return None;
        }
        self.pending
            .take()
            .map(|scroll| ViewCommand::ScrollNodeIntoView {
                node_id: scroll.node_id,
                behavior: scroll.behavior,
            })
    }
}
