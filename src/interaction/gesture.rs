use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

use super::{GesturePhase, GestureRelease};

/// Ephemeral state between a press and its release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub anchor_x: f64,
    /// Offset (outer track) or scroll position (thumbnail strip) at press time.
    pub base: f64,
    pub last_delta_px: f64,
}

/// Press/move/release state machine for one draggable surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSurface {
    phase: GesturePhase,
    session: Option<DragSession>,
    click_slop_px: f64,
}

impl DragSurface {
    #[must_use]
    pub fn new(click_slop_px: f64) -> Self {
        Self {
            phase: GesturePhase::Idle,
            session: None,
            click_slop_px: click_slop_px.max(0.0),
        }
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[must_use]
    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != GesturePhase::Idle
    }

    /// Arms the surface. A press while already active restarts the session.
    pub fn press(&mut self, x: f64, base: f64) -> TimelineResult<()> {
        if !x.is_finite() || !base.is_finite() {
            return Err(TimelineError::InvalidData(
                "gesture anchor and base must be finite".to_owned(),
            ));
        }
        self.phase = GesturePhase::Armed;
        self.session = Some(DragSession {
            anchor_x: x,
            base,
            last_delta_px: 0.0,
        });
        Ok(())
    }

    /// Returns the session and pointer delta while dragging.
    ///
    /// Moves within the click slop keep the surface armed and return `None`.
    pub fn move_to(&mut self, x: f64) -> Option<(DragSession, f64)> {
        if !x.is_finite() {
            return None;
        }
        let session = self.session.as_mut()?;
        let delta_px = x - session.anchor_x;
        if self.phase == GesturePhase::Armed {
            if delta_px.abs() < self.click_slop_px || delta_px == 0.0 {
                return None;
            }
            self.phase = GesturePhase::Dragging;
        }
        session.last_delta_px = delta_px;
        Some((*session, delta_px))
    }

    /// Ends the gesture. Returns `None` when the surface was idle.
    pub fn release(&mut self) -> Option<GestureRelease> {
        let phase = self.phase;
        let session = self.session.take();
        self.phase = GesturePhase::Idle;
        match (phase, session) {
            (GesturePhase::Dragging, Some(session)) => Some(GestureRelease::Drag {
                delta_px: session.last_delta_px,
            }),
            (GesturePhase::Armed, _) => Some(GestureRelease::Click),
            _ => None,
        }
    }

    /// Drops the session without producing a release. Returns the phase it was in.
    pub fn abort(&mut self) -> GesturePhase {
        let phase = self.phase;
        self.phase = GesturePhase::Idle;
        self.session = None;
        phase
    }
}

impl Default for DragSurface {
    fn default() -> Self {
        Self::new(super::DEFAULT_CLICK_SLOP_PX)
    }
}
