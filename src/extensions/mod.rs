//! Optional hooks for hosts that want to observe engine activity.
//!
//! Observers are read-only: they never mutate engine state.

pub mod observers;

pub use observers::{ObserverContext, TimelineEvent, TimelineObserver};
