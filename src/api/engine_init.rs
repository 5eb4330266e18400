use tracing::debug;

use crate::detail::DetailPresenter;
use crate::error::TimelineResult;
use crate::storage::SessionStore;

use super::config_validation::validate_engine_config;
use super::{TimelineEngine, TimelineEngineConfig, timeline_model::TimelineModel};

impl<P: DetailPresenter, S: SessionStore> TimelineEngine<P, S> {
    /// Creates an engine with `offset = 0`, no nodes, and nothing mounted.
    pub fn new(presenter: P, store: S, config: TimelineEngineConfig) -> TimelineResult<Self> {
        validate_engine_config(&config)?;
        debug!(
            container_width_px = config.container_width_px,
            scroll_step_percent = config.scroll_step_percent,
            "timeline engine created"
        );
        let model = TimelineModel::new(&config);
        Ok(Self {
            presenter,
            store,
            config,
            model,
            observers: Vec::new(),
        })
    }
}
