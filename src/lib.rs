//! art-timeline: navigation engine for a horizontally scrollable year axis.
//!
//! The crate owns the timeline's viewport offset, pointer-drag arbitration,
//! deep-link navigation, timed highlights and session view persistence. Hosts
//! render from [`TimelineEngine::snapshot`] and drive time through
//! [`TimelineEngine::advance_time`].

pub mod api;
pub mod core;
pub mod detail;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod storage;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
