use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::detail::DetailPresenter;
use crate::error::{TimelineError, TimelineResult};
use crate::extensions::TimelineEvent;
use crate::storage::SessionStore;

use super::{ScrollBehavior, TimelineEngine};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// Swallowed because it ended a drag.
    Suppressed,
    Selected { node_id: String },
    Deselected { node_id: String },
}

impl<P: DetailPresenter, S: SessionStore> TimelineEngine<P, S> {
    /// Node click. Toggles selection and the inline detail panel.
    pub fn click_node(&mut self, node_id: &str) -> TimelineResult<ClickOutcome> {
        if !self.model.gestures.take_click_permission() {
            debug!(node_id, "click suppressed after drag");
            return Ok(ClickOutcome::Suppressed);
        }
        let Some(node) = self.model.dataset.find(node_id) else {
            return Err(TimelineError::UnknownNode {
                id: node_id.to_owned(),
            });
        };

        if self.model.selected.as_deref() == Some(node_id) {
            self.model.selected = None;
            self.presenter.close_detail();
            self.emit_event(TimelineEvent::NodeDeselected);
            return Ok(ClickOutcome::Deselected {
                node_id: node_id.to_owned(),
            });
        }

        let year = node.year;
        self.presenter.show_detail(node);
        self.model.selected = Some(node_id.to_owned());
        self.save_view_state();
        self.focus_node(
            node_id,
            year,
            self.config.selection_highlight_ms,
            ScrollBehavior::Smooth,
            self.config.selection_scroll_defer_ms,
        );
        self.emit_event(TimelineEvent::NodeSelected {
            node_id: node_id.to_owned(),
        });
        Ok(ClickOutcome::Selected {
            node_id: node_id.to_owned(),
        })
    }

    /// Closes the inline detail panel and drops selection and highlight.
    pub fn close_detail(&mut self) {
        let had_selection = self.model.selected.take().is_some();
        let had_highlight = self.model.highlight.clear_highlight().is_some();
        self.presenter.close_detail();
        if had_selection {
            self.emit_event(TimelineEvent::NodeDeselected);
        }
        if had_highlight {
            self.emit_event(TimelineEvent::HighlightChanged { node_id: None });
        }
    }

    /// Leaves for the node's full detail page. The next `mount` comes back
    /// centered on it.
    pub fn open_detail_page(&mut self, node_id: &str) -> TimelineResult<()> {
        self.ensure_known_node(node_id)?;
        self.save_view_state();
        let marker_key = &self.config.storage_keys.last_viewed_node;
        self.store.set(marker_key, node_id.to_owned());
        if let Some(node) = self.model.dataset.find(node_id) {
            self.presenter.navigate_to_detail(node);
        }
        debug!(node_id, "navigating to detail page");
        Ok(())
    }
}
