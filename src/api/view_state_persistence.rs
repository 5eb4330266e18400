use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::detail::DetailPresenter;
use crate::extensions::TimelineEvent;
use crate::storage::SessionStore;

use super::{ScrollBehavior, StorageKeys, TimelineEngine};

/// Offset and list scroll position saved when leaving the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersistedView {
    pub offset: f64,
    pub scroll_top: f64,
}

impl PersistedView {
    /// Reads the stored view. Corrupt values count as absent; when only one
    /// of the two keys survives, the other falls back to `0`.
    #[must_use]
    pub fn load<S: SessionStore + ?Sized>(store: &S, keys: &StorageKeys) -> Option<Self> {
        let offset = parse_stored(store, &keys.offset, |value| value.is_finite());
        let scroll_top = parse_stored(store, &keys.scroll_top, |value| {
            value.is_finite() && value >= 0.0
        });
        if offset.is_none() && scroll_top.is_none() {
            return None;
        }
        Some(Self {
            offset: offset.unwrap_or(0.0),
            scroll_top: scroll_top.unwrap_or(0.0),
        })
    }

    pub fn save<S: SessionStore + ?Sized>(self, store: &mut S, keys: &StorageKeys) {
        store.set(&keys.offset, self.offset.to_string());
        store.set(&keys.scroll_top, self.scroll_top.to_string());
    }
}

fn parse_stored<S, F>(store: &S, key: &str, accept: F) -> Option<f64>
where
    S: SessionStore + ?Sized,
    F: Fn(f64) -> bool,
{
    let raw = store.get(key)?;
    match raw.trim().parse::<f64>() {
        Ok(value) if accept(value) => Some(value),
        Ok(value) => {
            warn!(key, value, "ignoring out-of-range stored view value");
            None
        }
        Err(err) => {
            warn!(key, raw = %raw, error = %err, "ignoring corrupt stored view value");
            None
        }
    }
}

/// What `mount` restored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RestoreOutcome {
    /// The last-viewed marker pointed at a loaded node; it was centered.
    FocusedNode { node_id: String },
    /// The stored offset and scroll position were reapplied.
    Resumed(PersistedView),
    /// Nothing usable was stored.
    Default,
}

impl<P: DetailPresenter, S: SessionStore> TimelineEngine<P, S> {
    #[must_use]
    pub fn persisted_view(&self) -> PersistedView {
        PersistedView {
            offset: self.model.viewport.snapshot(),
            scroll_top: self.model.scroll_top,
        }
    }

    /// Writes the current offset and scroll position to the session store.
    pub fn save_view_state(&mut self) -> PersistedView {
        let view = self.persisted_view();
        view.save(&mut self.store, &self.config.storage_keys);
        debug!(offset = view.offset, scroll_top = view.scroll_top, "view state saved");
        self.emit_event(TimelineEvent::ViewSaved {
            offset: view.offset,
            scroll_top: view.scroll_top,
        });
        view
    }

    /// Timeline became visible. Restores, in priority order, the last-viewed
    /// node, the stored view, or the defaults; then runs any pending deep link.
    pub fn mount(&mut self) -> RestoreOutcome {
        self.abort_gestures();
        self.model.viewport.reset();
        self.model.scroll_top = 0.0;
        self.model.selected = None;
        self.model.highlight.clear_highlight();
        self.model.scrolls.cancel();
        self.model.mounted = true;
        self.model.marker_deferred = self.model.dataset.is_empty();

        let outcome = match self.restore_from_marker() {
            Some(node_id) => RestoreOutcome::FocusedNode { node_id },
            None => self.restore_stored_view(),
        };
        debug!(?outcome, "timeline mounted");

        let focused_node = match &outcome {
            RestoreOutcome::FocusedNode { node_id } => Some(node_id.clone()),
            RestoreOutcome::Resumed(_) | RestoreOutcome::Default => None,
        };
        self.emit_event(TimelineEvent::ViewRestored { focused_node });
        self.run_pending_deep_link();
        outcome
    }

    /// Timeline is going away: cancel gestures, persist the view, drop
    /// pending scrolls.
    pub fn unmount(&mut self) -> PersistedView {
        self.abort_gestures();
        let view = self.save_view_state();
        self.model.scrolls.cancel();
        self.model.mounted = false;
        self.model.marker_deferred = false;
        view
    }

    /// Consumes the last-viewed marker when its node is loaded.
    ///
    /// With an empty dataset the marker is left for a later attempt.
    pub(super) fn restore_from_marker(&mut self) -> Option<String> {
        if self.model.dataset.is_empty() {
            return None;
        }
        let marker_key = self.config.storage_keys.last_viewed_node.clone();
        let node_id = self.store.get(&marker_key)?;
        self.store.remove(&marker_key);
        let Some(year) = self.model.dataset.find(&node_id).map(|node| node.year) else {
            debug!(node_id = %node_id, "last viewed node no longer present");
            return None;
        };
        self.focus_node(
            &node_id,
            year,
            self.config.restore_highlight_ms,
            ScrollBehavior::Instant,
            self.config.navigation_scroll_defer_ms,
        );
        Some(node_id)
    }

    fn restore_stored_view(&mut self) -> RestoreOutcome {
        let Some(view) = PersistedView::load(&self.store, &self.config.storage_keys) else {
            return RestoreOutcome::Default;
        };
        if self.model.viewport.restore(view.offset).is_err() {
            return RestoreOutcome::Default;
        }
        self.model.scroll_top = view.scroll_top;
        self.emit_event(TimelineEvent::OffsetChanged {
            offset: view.offset,
        });
        RestoreOutcome::Resumed(view)
    }
}
