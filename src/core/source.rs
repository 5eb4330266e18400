use serde::Deserialize;

use crate::error::{TimelineError, TimelineResult};

use super::types::TimelineNode;

/// Supplies the full node list. The engine holds only the latest result.
pub trait NodeSource {
    fn fetch_nodes(&mut self) -> TimelineResult<Vec<TimelineNode>>;
}

/// In-memory source, mostly for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticNodeSource {
    nodes: Vec<TimelineNode>,
}

impl StaticNodeSource {
    #[must_use]
    pub fn new(nodes: Vec<TimelineNode>) -> Self {
        Self { nodes }
    }
}

impl NodeSource for StaticNodeSource {
    fn fetch_nodes(&mut self) -> TimelineResult<Vec<TimelineNode>> {
        Ok(self.nodes.clone())
    }
}

/// Parses a movements payload: either a bare array or `{ "data": [...] }`.
#[derive(Debug, Clone)]
pub struct JsonNodeSource {
    payload: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MovementsPayload {
    Bare(Vec<TimelineNode>),
    Wrapped { data: Vec<TimelineNode> },
}

impl JsonNodeSource {
    #[must_use]
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl NodeSource for JsonNodeSource {
    fn fetch_nodes(&mut self) -> TimelineResult<Vec<TimelineNode>> {
        let payload: MovementsPayload = serde_json::from_str(&self.payload)
            .map_err(|e| TimelineError::Source(format!("failed to parse movements json: {e}")))?;
        Ok(match payload {
            MovementsPayload::Bare(nodes) | MovementsPayload::Wrapped { data: nodes } => nodes,
        })
    }
}
