use serde::{Deserialize, Serialize};

use crate::core::YearAxis;
use crate::interaction::SurfaceKind;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub offset: f64,
    pub scroll_top: f64,
    pub axis: YearAxis,
    pub nodes_len: usize,
    pub visible_nodes_len: usize,
    pub highlighted: Option<String>,
    pub selected: Option<String>,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimelineEvent {
    NodesLoaded { count: usize },
    SearchChanged { visible: usize },
    OffsetChanged { offset: f64 },
    DragStarted { surface: SurfaceKind },
    DragEnded { surface: SurfaceKind },
    NodeSelected { node_id: String },
    NodeDeselected,
    HighlightChanged { node_id: Option<String> },
    Navigated { node_id: String },
    ViewSaved { offset: f64, scroll_top: f64 },
    ViewRestored { focused_node: Option<String> },
}

/// Hook interface for bounded custom logic (analytics, debugging overlays).
pub trait TimelineObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &TimelineEvent, context: &ObserverContext);
}
