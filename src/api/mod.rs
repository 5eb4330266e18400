mod config_validation;
mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod frame_controller;
mod gesture_controller;
mod highlight_scheduler;
mod json_contract;
mod navigation_resolver;
mod observer_registry;
mod scroll_scheduler;
mod selection_controller;
mod snapshot_controller;
mod timeline_model;
mod view_state_persistence;
mod viewport_controller;

pub use engine::TimelineEngine;
pub use engine_config::{DragFactorPolicy, StorageKeys, TimelineEngineConfig};
pub use engine_snapshot::EngineSnapshot;
pub use gesture_controller::PointerTarget;
pub use highlight_scheduler::{HighlightHandle, HighlightScheduler};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use navigation_resolver::{
    DeepLinkRequest, NavigationOutcome, STYLE_QUERY_KEY, YEAR_QUERY_KEY, resolve_target,
};
pub use scroll_scheduler::{ScheduledScroll, ScrollBehavior, ScrollScheduler, ViewCommand};
pub use selection_controller::ClickOutcome;
pub use view_state_persistence::{PersistedView, RestoreOutcome};
pub use viewport_controller::{ScrollDirection, ViewportOffsetController};
