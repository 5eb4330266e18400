use tracing::{debug, warn};

use crate::core::{NodeDataset, NodeSource, TimelineNode};
use crate::detail::DetailPresenter;
use crate::error::TimelineResult;
use crate::extensions::TimelineEvent;
use crate::storage::SessionStore;

use super::TimelineEngine;

impl<P: DetailPresenter, S: SessionStore> TimelineEngine<P, S> {
    /// Replaces the node dataset and returns the number of nodes kept.
    ///
    /// The search term survives the swap. Selection, highlight and pending
    /// scrolls pointing at vanished nodes are dropped. On a mounted timeline
    /// a non-empty load runs any pending deep link, and consumes the
    /// last-viewed marker only when `mount` found no nodes to restore from.
    pub fn set_nodes(&mut self, nodes: Vec<TimelineNode>) -> usize {
        let original_count = nodes.len();
        let search_term = self.model.dataset.search_term().to_owned();
        let mut dataset = NodeDataset::new(nodes);
        if !search_term.is_empty() {
            dataset.set_search_term(search_term);
        }
        self.model.dataset = dataset;
        let count = self.model.dataset.len();
        debug!(original_count, canonical_count = count, "set timeline nodes");

        let dataset = &self.model.dataset;
        self.model
            .gestures
            .retain_thumbnails(|node_id| dataset.contains(node_id));
        if let Some(selected) = self.model.selected.take() {
            if self.model.dataset.contains(&selected) {
                self.model.selected = Some(selected);
            } else {
                self.presenter.close_detail();
            }
        }
        if let Some(highlighted) = self.model.highlight.highlighted() {
            if !self.model.dataset.contains(highlighted) {
                self.model.highlight.clear_highlight();
            }
        }
        if let Some(pending) = self.model.scrolls.pending() {
            if !self.model.dataset.contains(&pending.node_id) {
                self.model.scrolls.cancel();
            }
        }

        self.emit_event(TimelineEvent::NodesLoaded { count });

        if self.model.mounted && count > 0 {
            if std::mem::take(&mut self.model.marker_deferred) {
                self.restore_from_marker();
            }
            self.run_pending_deep_link();
        }
        count
    }

    /// Fetches from `source` and installs the result.
    ///
    /// On failure the previously loaded nodes stay in place.
    pub fn load_nodes<N: NodeSource + ?Sized>(&mut self, source: &mut N) -> TimelineResult<usize> {
        match source.fetch_nodes() {
            Ok(nodes) => Ok(self.set_nodes(nodes)),
            Err(err) => {
                warn!(
                    error = %err,
                    kept_nodes = self.model.dataset.len(),
                    "node fetch failed; keeping previous dataset"
                );
                Err(err)
            }
        }
    }

    /// Filters visible nodes by title, description, artist or style movement.
    ///
    /// Returns the number of visible nodes. The year axis follows the
    /// visible subset.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> usize {
        self.model.dataset.set_search_term(term);
        let visible = self.model.dataset.visible_len();
        debug!(
            search_term = self.model.dataset.search_term(),
            visible, "search term updated"
        );
        self.emit_event(TimelineEvent::SearchChanged { visible });
        visible
    }

    pub fn clear_search(&mut self) -> usize {
        self.set_search_term(String::new())
    }
}
