use crate::detail::DetailPresenter;
use crate::error::{TimelineError, TimelineResult};
use crate::extensions::{ObserverContext, TimelineEvent, TimelineObserver};
use crate::storage::SessionStore;

use super::TimelineEngine;

impl<P: DetailPresenter, S: SessionStore> TimelineEngine<P, S> {
    /// Registers an observer with a unique identifier.
    pub fn register_observer(&mut self, observer: Box<dyn TimelineObserver>) -> TimelineResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(TimelineError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.observers.iter().any(|entry| entry.id() == observer_id) {
            return Err(TimelineError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        match self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            Some(position) => {
                self.observers.remove(position);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub(super) fn observer_context(&self) -> ObserverContext {
        ObserverContext {
            offset: self.offset(),
            scroll_top: self.model.scroll_top,
            axis: self.axis(),
            nodes_len: self.model.dataset.len(),
            visible_nodes_len: self.model.dataset.visible_len(),
            highlighted: self.model.highlight.highlighted().map(str::to_owned),
            selected: self.model.selected.clone(),
        }
    }

    pub(super) fn emit_event(&mut self, event: TimelineEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(&event, &context);
        }
    }
}
