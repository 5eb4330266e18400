use crate::detail::DetailPresenter;
use crate::error::{TimelineError, TimelineResult};
use crate::storage::SessionStore;

use super::{EngineSnapshot, TimelineEngine};

impl<P: DetailPresenter, S: SessionStore> TimelineEngine<P, S> {
    /// Captures rendered positions and timing state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            offset: self.offset(),
            scroll_top: self.model.scroll_top,
            container_width_px: self.model.container_width_px,
            axis: self.axis(),
            search_term: self.model.dataset.search_term().to_owned(),
            nodes: self.node_positions(),
            year_marks: self.year_marks(),
            highlighted: self.model.highlight.highlighted().map(str::to_owned),
            selected: self.model.selected.clone(),
            pending_scroll: self.model.scrolls.pending().cloned(),
            dragging: self.model.gestures.is_dragging(),
            now_ms: self.model.now_ms,
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
