use tracing::trace;

use crate::detail::DetailPresenter;
use crate::extensions::TimelineEvent;
use crate::storage::SessionStore;

use super::{TimelineEngine, ViewCommand};

impl<P: DetailPresenter, S: SessionStore> TimelineEngine<P, S> {
    /// Advances the engine clock by one host frame.
    ///
    /// Returns the scroll that came due, followed by any highlight expiry.
    /// Work scheduled while handling these commands waits for the next call.
    pub fn advance_time(&mut self, delta_ms: u64) -> Vec<ViewCommand> {
        self.model.now_ms = self.model.now_ms.saturating_add(delta_ms);
        let now_ms = self.model.now_ms;
        let mut commands = Vec::new();

        if let Some(command) = self.model.scrolls.take_due(now_ms) {
            commands.push(command);
        }
        if let Some(node_id) = self.model.highlight.expire(now_ms) {
            commands.push(ViewCommand::HighlightExpired { node_id });
            self.emit_event(TimelineEvent::HighlightChanged { node_id: None });
        }

        if !commands.is_empty() {
            trace!(now_ms, count = commands.len(), "view commands due");
        }
        commands
    }
}
