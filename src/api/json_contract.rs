use serde::{Deserialize, Serialize};

use crate::detail::DetailPresenter;
use crate::error::{TimelineError, TimelineResult};
use crate::storage::SessionStore;

use super::{EngineSnapshot, TimelineEngine};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned snapshot document written by `timeline_probe` and host traces.
///
/// `now_ms` and `focused_node` repeat snapshot fields at the top level so a
/// sequence of documents can be ordered and grepped without unpacking them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    #[serde(default)]
    pub now_ms: u64,
    /// Selected node, else highlighted node.
    #[serde(default)]
    pub focused_node: Option<String>,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshotJsonContractV1 {
    #[must_use]
    pub fn from_snapshot(snapshot: EngineSnapshot) -> Self {
        Self {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            now_ms: snapshot.now_ms,
            focused_node: snapshot
                .selected
                .clone()
                .or_else(|| snapshot.highlighted.clone()),
            snapshot,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    Versioned(EngineSnapshotJsonContractV1),
    Bare(EngineSnapshot),
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        let document = EngineSnapshotJsonContractV1::from_snapshot(self.clone());
        serde_json::to_string_pretty(&document).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned v1 document.
    pub fn from_json_compat_str(input: &str) -> TimelineResult<Self> {
        let document: SnapshotDocument = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        match document {
            SnapshotDocument::Bare(snapshot) => Ok(snapshot),
            SnapshotDocument::Versioned(document)
                if document.schema_version == ENGINE_SNAPSHOT_JSON_SCHEMA_V1 =>
            {
                Ok(document.snapshot)
            }
            SnapshotDocument::Versioned(document) => Err(TimelineError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                document.schema_version
            ))),
        }
    }
}

impl<P: DetailPresenter, S: SessionStore> TimelineEngine<P, S> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
