use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::detail::DetailPresenter;
use crate::error::TimelineResult;
use crate::extensions::TimelineEvent;
use crate::interaction::{GestureMove, GestureRelease, SurfaceKind};
use crate::storage::SessionStore;

use super::TimelineEngine;

/// Where a pointer press landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// The outer year track, including node rows outside thumbnail strips.
    Track,
    /// A node's thumbnail strip; presses here never reach the track.
    Thumbnail(String),
}

impl<P: DetailPresenter, S: SessionStore> TimelineEngine<P, S> {
    pub fn pointer_down(&mut self, target: PointerTarget, x: f64) -> TimelineResult<()> {
        match target {
            PointerTarget::Track => {
                self.model.viewport.end_drag();
                self.model.gestures.press_outer(x, self.model.viewport.offset())?;
                self.model.viewport.begin_drag();
            }
            PointerTarget::Thumbnail(node_id) => {
                self.ensure_known_node(&node_id)?;
                if self.model.gestures.active_surface() == Some(&SurfaceKind::Outer) {
                    self.model.viewport.end_drag();
                }
                self.model.gestures.press_thumbnail(&node_id, x)?;
            }
        }
        trace!(x, "pointer down");
        Ok(())
    }

    /// Applies a pointer move to the pressed surface.
    ///
    /// Returns `None` while idle or while movement stays within the click slop.
    pub fn pointer_move(&mut self, x: f64) -> TimelineResult<Option<GestureMove>> {
        let was_dragging = self.model.gestures.is_dragging();
        let Some(gesture_move) = self.model.gestures.move_to(x) else {
            return Ok(None);
        };
        if !was_dragging {
            if let Some(surface) = self.model.gestures.active_surface().cloned() {
                debug!(?surface, "drag started");
                self.emit_event(TimelineEvent::DragStarted { surface });
            }
        }
        if let GestureMove::Outer { delta_px, .. } = gesture_move {
            let width = self.model.container_width_px;
            let factor = self.drag_factor();
            let offset = self.model.viewport.drag_by(delta_px, width, factor)?;
            self.emit_event(TimelineEvent::OffsetChanged { offset });
        }
        Ok(Some(gesture_move))
    }

    /// Ends the gesture. A `Drag` release means the next node click is swallowed.
    pub fn pointer_up(&mut self) -> Option<(SurfaceKind, GestureRelease)> {
        let (surface, release) = self.model.gestures.release()?;
        if surface == SurfaceKind::Outer {
            self.model.viewport.end_drag();
        }
        if release.is_drag() {
            debug!(?surface, ?release, "drag ended");
            self.emit_event(TimelineEvent::DragEnded {
                surface: surface.clone(),
            });
        }
        Some((surface, release))
    }

    /// Pointer left the surface; behaves like a release.
    pub fn pointer_leave(&mut self) -> Option<(SurfaceKind, GestureRelease)> {
        self.pointer_up()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.model.gestures.is_dragging()
    }

    /// Cancels the gesture in flight so a programmatic offset write cannot
    /// interleave with drag writes.
    pub(super) fn abort_gestures(&mut self) {
        if let Some(surface) = self.model.gestures.abort_active() {
            if surface == SurfaceKind::Outer {
                self.model.viewport.end_drag();
            }
            debug!(?surface, "gesture aborted");
        }
    }
}
