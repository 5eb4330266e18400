use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{NodeDataset, TimelineNode};
use crate::detail::DetailPresenter;
use crate::extensions::TimelineEvent;
use crate::storage::SessionStore;

use super::{ScrollBehavior, TimelineEngine};

/// Query parameter naming a node by title or style movement.
pub const STYLE_QUERY_KEY: &str = "style";
/// Query parameter naming a year; the nearest node is focused.
pub const YEAR_QUERY_KEY: &str = "year";

/// Request to focus a node without user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeepLinkRequest {
    Style(String),
    Year(i32),
}

impl DeepLinkRequest {
    /// Parses `style=...` or `year=...` from a URL query string.
    ///
    /// `style` wins when both are present; a non-integer year is ignored.
    #[must_use]
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.trim().trim_start_matches('?');
        let mut style = None;
        let mut year = None;
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                STYLE_QUERY_KEY if style.is_none() => {
                    let value = value.trim();
                    if !value.is_empty() {
                        style = Some(value.to_owned());
                    }
                }
                YEAR_QUERY_KEY if year.is_none() => {
                    year = value.trim().parse::<i32>().ok();
                }
                _ => {}
            }
        }
        style.map(Self::Style).or(year.map(Self::Year))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavigationOutcome {
    /// The node was centered, highlighted, and a scroll was scheduled.
    Focused { node_id: String, offset: f64 },
    /// Nothing matched; state is unchanged.
    NotFound,
    /// The dataset is empty; nothing to resolve against.
    NoNodes,
    /// Kept until nodes are loaded and the view is mounted.
    Deferred,
    /// The query carried no deep-link parameter.
    NoRequest,
}

/// Finds the node a request points at.
///
/// Style requests match case-insensitively, exact before partial. Year
/// requests pick the nearest year, ties going to the earlier node.
#[must_use]
pub fn resolve_target<'a>(
    dataset: &'a NodeDataset,
    request: &DeepLinkRequest,
) -> Option<&'a TimelineNode> {
    match request {
        DeepLinkRequest::Style(style) => dataset.find_by_style(style),
        DeepLinkRequest::Year(year) => dataset.nearest_to_year(*year),
    }
}

impl<P: DetailPresenter, S: SessionStore> TimelineEngine<P, S> {
    /// Parses a query string and runs (or defers) the deep link it carries.
    pub fn apply_query(&mut self, query: &str) -> NavigationOutcome {
        match DeepLinkRequest::from_query(query) {
            Some(request) => self.request_deep_link(request),
            None => NavigationOutcome::NoRequest,
        }
    }

    /// Runs the request now, or once nodes are loaded and the view is mounted.
    pub fn request_deep_link(&mut self, request: DeepLinkRequest) -> NavigationOutcome {
        if self.model.dataset.is_empty() || !self.model.mounted {
            debug!(?request, "deep link deferred until nodes load and view mounts");
            self.model.pending_deep_link = Some(request);
            return NavigationOutcome::Deferred;
        }
        self.resolve_deep_link(&request)
    }

    #[must_use]
    pub fn pending_deep_link(&self) -> Option<&DeepLinkRequest> {
        self.model.pending_deep_link.as_ref()
    }

    /// Centers, highlights and schedules a scroll to the request's target.
    ///
    /// Repeating the same request lands on the same offset.
    pub fn resolve_deep_link(&mut self, request: &DeepLinkRequest) -> NavigationOutcome {
        if self.model.dataset.is_empty() {
            return NavigationOutcome::NoNodes;
        }
        let Some(target) = resolve_target(&self.model.dataset, request) else {
            debug!(?request, "deep link target not found");
            return NavigationOutcome::NotFound;
        };
        let node_id = target.id.clone();
        let year = target.year;
        let offset = self.focus_node(
            &node_id,
            year,
            self.config.deep_link_highlight_ms,
            ScrollBehavior::Instant,
            self.config.navigation_scroll_defer_ms,
        );
        debug!(node_id = %node_id, year, offset, "deep link resolved");
        self.emit_event(TimelineEvent::Navigated {
            node_id: node_id.clone(),
        });
        NavigationOutcome::Focused { node_id, offset }
    }

    /// Year-mark click: centers the clicked year and focuses the nearest visible node.
    pub fn focus_year(&mut self, year: i32) -> NavigationOutcome {
        let Some(node) = self.model.dataset.nearest_visible_to_year(year) else {
            return NavigationOutcome::NoNodes;
        };
        let node_id = node.id.clone();
        let offset = self.focus_node(
            &node_id,
            year,
            self.config.deep_link_highlight_ms,
            ScrollBehavior::Instant,
            self.config.navigation_scroll_defer_ms,
        );
        self.emit_event(TimelineEvent::Navigated {
            node_id: node_id.clone(),
        });
        NavigationOutcome::Focused { node_id, offset }
    }

    pub(super) fn run_pending_deep_link(&mut self) {
        if self.model.dataset.is_empty() || !self.model.mounted {
            return;
        }
        if let Some(request) = self.model.pending_deep_link.take() {
            self.resolve_deep_link(&request);
        }
    }

    /// Shared focus path: abort gestures, center `center_year`, highlight
    /// `node_id`, and schedule its scroll-into-view.
    ///
    /// A target hidden by the search filter clears the filter first so the
    /// centered offset is computed on the axis the node is rendered on.
    pub(super) fn focus_node(
        &mut self,
        node_id: &str,
        center_year: i32,
        highlight_ms: u64,
        behavior: ScrollBehavior,
        scroll_defer_ms: u64,
    ) -> f64 {
        self.abort_gestures();
        if !self.model.dataset.is_visible(node_id) {
            debug!(
                node_id,
                search_term = self.model.dataset.search_term(),
                "focus target hidden by search; clearing filter"
            );
            self.clear_search();
        }
        let axis = self.axis();
        let offset = self.model.viewport.center_on_axis_year(axis, center_year);
        let now_ms = self.model.now_ms;
        self.model
            .highlight
            .set_highlight(node_id, now_ms, highlight_ms);
        self.model
            .scrolls
            .schedule(node_id, behavior, now_ms.saturating_add(scroll_defer_ms));
        self.emit_event(TimelineEvent::OffsetChanged { offset });
        self.emit_event(TimelineEvent::HighlightChanged {
            node_id: Some(node_id.to_owned()),
        });
        offset
    }
}
