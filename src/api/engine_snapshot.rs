use serde::{Deserialize, Serialize};

use crate::core::{NodePosition, YearAxis, YearMarkPosition};

use super::ScheduledScroll;

/// Serializable deterministic state snapshot used by regression tests and
/// the probe tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub offset: f64,
    pub scroll_top: f64,
    pub container_width_px: f64,
    pub axis: YearAxis,
    #[serde(default)]
    pub search_term: String,
    pub nodes: Vec<NodePosition>,
    pub year_marks: Vec<YearMarkPosition>,
    #[serde(default)]
    pub highlighted: Option<String>,
    #[serde(default)]
    pub selected: Option<String>,
    #[serde(default)]
    pub pending_scroll: Option<ScheduledScroll>,
    #[serde(default)]
    pub dragging: bool,
    pub now_ms: u64,
}

impl EngineSnapshot {
    #[must_use]
    pub fn node(&self, node_id: &str) -> Option<&NodePosition> {
        self.nodes.iter().find(|position| position.id == node_id)
    }
}
