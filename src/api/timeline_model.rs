use crate::core::NodeDataset;
use crate::interaction::GestureArbiter;

use super::{
    DeepLinkRequest, HighlightScheduler, ScrollScheduler, TimelineEngineConfig,
    ViewportOffsetController,
};

/// Mutable timeline state owned by the engine facade.
///
/// Every field here is written only from `&mut TimelineEngine` methods, so
/// the gesture arbiter's phase is the only thing serializing offset writes.
pub(super) struct TimelineModel {
    pub(super) dataset: NodeDataset,
    pub(super) viewport: ViewportOffsetController,
    pub(super) gestures: GestureArbiter,
    pub(super) highlight: HighlightScheduler,
    pub(super) scrolls: ScrollScheduler,
    pub(super) selected: Option<String>,
    pub(super) scroll_top: f64,
    pub(super) container_width_px: f64,
    pub(super) now_ms: u64,
    pub(super) pending_deep_link: Option<DeepLinkRequest>,
    pub(super) mounted: bool,
    /// `mount` found no nodes; the next non-empty load owns the marker.
    pub(super) marker_deferred: bool,
}

impl TimelineModel {
    pub(super) fn new(config: &TimelineEngineConfig) -> Self {
        Self {
            dataset: NodeDataset::default(),
            viewport: ViewportOffsetController::new(config.scroll_step_percent),
            gestures: GestureArbiter::new(config.click_slop_px, config.thumbnail_drag_factor),
            highlight: HighlightScheduler::default(),
            scrolls: ScrollScheduler::default(),
            selected: None,
            scroll_top: 0.0,
            container_width_px: config.container_width_px,
            now_ms: 0,
            pending_deep_link: None,
            mounted: false,
            marker_deferred: false,
        }
    }
}
