//! Pointer gesture handling for the timeline's nested drag surfaces.
//!
//! Every surface (the outer track and each thumbnail strip) runs its own
//! [`DragSurface`] state machine; [`GestureArbiter`] routes pointer input to
//! the surface that was pressed and decides whether a release counts as a
//! click.

mod arbiter;
mod gesture;

use serde::{Deserialize, Serialize};

pub use arbiter::{GestureArbiter, GestureMove, ThumbnailStrip};
pub use gesture::{DragSession, DragSurface};

/// Default pointer travel, in pixels, under which a press stays a click.
pub const DEFAULT_CLICK_SLOP_PX: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    Idle,
    /// Pressed, no movement past the slop yet.
    Armed,
    /// Moved past the slop; sticky until release.
    Dragging,
}

/// Which surface a pointer press landed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    Outer,
    Thumbnail(String),
}

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureRelease {
    /// No movement past the slop; the surface's click handler may run.
    Click,
    /// The pointer dragged; the following click must be swallowed.
    Drag { delta_px: f64 },
}

impl GestureRelease {
    #[must_use]
    pub fn is_drag(self) -> bool {
        matches!(self, Self::Drag { .. })
    }
}
