use tracing::debug;

use crate::core::{NodePosition, TimelineNode, YearAxis, YearMarkPosition};
use crate::detail::DetailPresenter;
use crate::error::{TimelineError, TimelineResult};
use crate::extensions::{TimelineEvent, TimelineObserver};
use crate::storage::SessionStore;

use super::config_validation::validate_container_width;
use super::{ScrollDirection, TimelineEngineConfig, timeline_model::TimelineModel};

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` coordinates the node dataset, the viewport offset,
/// gesture arbitration, deep-link navigation, highlight timing and view
/// persistence. It is generic over the detail-view collaborator and the
/// session store so both can be swapped for in-memory versions in tests.
pub struct TimelineEngine<P: DetailPresenter, S: SessionStore> {
    pub(super) presenter: P,
    pub(super) store: S,
    pub(super) config: TimelineEngineConfig,
    pub(super) model: TimelineModel,
    pub(super) observers: Vec<Box<dyn TimelineObserver>>,
}

impl<P: DetailPresenter, S: SessionStore> TimelineEngine<P, S> {
    #[must_use]
    pub fn config(&self) -> &TimelineEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub fn into_parts(self) -> (P, S) {
        (self.presenter, self.store)
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.model.viewport.offset()
    }

    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.model.scroll_top
    }

    /// Mirrors the list container's vertical scroll position.
    pub fn set_scroll_top(&mut self, scroll_top: f64) -> TimelineResult<()> {
        if !scroll_top.is_finite() || scroll_top < 0.0 {
            return Err(TimelineError::InvalidData(
                "scroll top must be finite and >= 0".to_owned(),
            ));
        }
        self.model.scroll_top = scroll_top;
        Ok(())
    }

    #[must_use]
    pub fn container_width_px(&self) -> f64 {
        self.model.container_width_px
    }

    pub fn resize(&mut self, container_width_px: f64) -> TimelineResult<()> {
        self.model.container_width_px = validate_container_width(container_width_px)?;
        debug!(container_width_px, "timeline container resized");
        Ok(())
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.model.now_ms
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.model.mounted
    }

    /// Axis spanning the visible nodes, or the configured default range.
    #[must_use]
    pub fn axis(&self) -> YearAxis {
        self.model
            .dataset
            .axis_or(self.config.default_min_year, self.config.default_max_year)
    }

    #[must_use]
    pub fn nodes(&self) -> &[TimelineNode] {
        self.model.dataset.nodes()
    }

    pub fn visible_nodes(&self) -> impl Iterator<Item = &TimelineNode> {
        self.model.dataset.visible_nodes()
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        self.model.dataset.search_term()
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&str> {
        self.model.highlight.highlighted()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.model.selected.as_deref()
    }

    /// Effective drag multiplier for the current axis.
    #[must_use]
    pub fn drag_factor(&self) -> f64 {
        self.config
            .drag_factor
            .effective_factor(self.axis().time_range())
    }

    #[must_use]
    pub fn position_of_year(&self, year: i32) -> f64 {
        self.axis().position(year, self.offset())
    }

    #[must_use]
    pub fn node_position(&self, node_id: &str) -> Option<f64> {
        self.model
            .dataset
            .find(node_id)
            .map(|node| self.position_of_year(node.year))
    }

    /// Positions of visible nodes, ascending by year.
    #[must_use]
    pub fn node_positions(&self) -> Vec<NodePosition> {
        let axis = self.axis();
        let offset = self.offset();
        self.model
            .dataset
            .visible_nodes()
            .map(|node| NodePosition {
                id: node.id.clone(),
                year: node.year,
                percent: axis.position(node.year, offset),
                highlighted: self.model.highlight.is_highlighted(&node.id),
                selected: self.model.selected.as_deref() == Some(node.id.as_str()),
            })
            .collect()
    }

    #[must_use]
    pub fn year_marks(&self) -> Vec<YearMarkPosition> {
        let axis = self.axis();
        let offset = self.offset();
        axis.year_marks(self.config.year_mark_divisions)
            .into_iter()
            .map(|year| YearMarkPosition {
                year,
                percent: axis.position(year, offset),
            })
            .collect()
    }

    /// Button-stepped scroll. Any drag in flight is cancelled first.
    pub fn step_scroll(&mut self, direction: ScrollDirection) -> f64 {
        self.abort_gestures();
        let offset = self.model.viewport.step_scroll(direction);
        self.emit_event(TimelineEvent::OffsetChanged { offset });
        offset
    }

    #[must_use]
    pub fn thumbnail_scroll_left(&self, node_id: &str) -> f64 {
        self.model.gestures.thumbnail_scroll_left(node_id)
    }

    pub fn set_thumbnail_extent(&mut self, node_id: &str, max_scroll_left: f64) -> TimelineResult<()> {
        self.ensure_known_node(node_id)?;
        self.model
            .gestures
            .set_thumbnail_extent(node_id, max_scroll_left)
    }

    pub fn set_thumbnail_scroll_left(&mut self, node_id: &str, scroll_left: f64) -> TimelineResult<()> {
        self.ensure_known_node(node_id)?;
        self.model
            .gestures
            .set_thumbnail_scroll_left(node_id, scroll_left)
    }

    pub(super) fn ensure_known_node(&self, node_id: &str) -> TimelineResult<()> {
        if self.model.dataset.contains(node_id) {
            Ok(())
        } else {
            Err(TimelineError::UnknownNode {
                id: node_id.to_owned(),
            })
        }
    }
}
