use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{TimelineError, TimelineResult};

use super::{DragSurface, GesturePhase, GestureRelease, SurfaceKind};

/// Horizontally scrollable thumbnail row belonging to one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailStrip {
    surface: DragSurface,
    scroll_left: f64,
    max_scroll_left: Option<f64>,
}

impl ThumbnailStrip {
    fn new(click_slop_px: f64) -> Self {
        Self {
            surface: DragSurface::new(click_slop_px),
            scroll_left: 0.0,
            max_scroll_left: None,
        }
    }

    #[must_use]
    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    #[must_use]
    pub fn max_scroll_left(&self) -> Option<f64> {
        self.max_scroll_left
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.surface.phase()
    }

    fn clamp(&self, value: f64) -> f64 {
        let value = value.max(0.0);
        match self.max_scroll_left {
            Some(max) => value.min(max),
            None => value,
        }
    }
}

/// Value update produced by a pointer move on the active surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GestureMove {
    /// Outer track drag; the viewport controller turns this into an offset.
    Outer { base_offset: f64, delta_px: f64 },
    /// Thumbnail strip drag, already applied to the strip.
    Thumbnail { node_id: String, scroll_left: f64 },
}

/// Routes pointer input to the outer track or a thumbnail strip and keeps
/// track of whether the next click must be swallowed.
#[derive(Debug, Clone)]
pub struct GestureArbiter {
    outer: DragSurface,
    thumbnails: IndexMap<String, ThumbnailStrip>,
    active: Option<SurfaceKind>,
    suppress_next_click: bool,
    click_slop_px: f64,
    thumbnail_drag_factor: f64,
}

impl GestureArbiter {
    #[must_use]
    pub fn new(click_slop_px: f64, thumbnail_drag_factor: f64) -> Self {
        Self {
            outer: DragSurface::new(click_slop_px),
            thumbnails: IndexMap::new(),
            active: None,
            suppress_next_click: false,
            click_slop_px,
            thumbnail_drag_factor,
        }
    }

    #[must_use]
    pub fn active_surface(&self) -> Option<&SurfaceKind> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn outer_phase(&self) -> GesturePhase {
        self.outer.phase()
    }

    #[must_use]
    pub fn thumbnail(&self, node_id: &str) -> Option<&ThumbnailStrip> {
        self.thumbnails.get(node_id)
    }

    /// Scroll position of a strip; strips never touched sit at `0`.
    #[must_use]
    pub fn thumbnail_scroll_left(&self, node_id: &str) -> f64 {
        self.thumbnails
            .get(node_id)
            .map_or(0.0, ThumbnailStrip::scroll_left)
    }

    /// `true` while any surface has moved past the click slop.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active_phase() == GesturePhase::Dragging
    }

    fn active_phase(&self) -> GesturePhase {
        match &self.active {
            None => GesturePhase::Idle,
            Some(SurfaceKind::Outer) => self.outer.phase(),
            Some(SurfaceKind::Thumbnail(node_id)) => self
                .thumbnails
                .get(node_id)
                .map_or(GesturePhase::Idle, ThumbnailStrip::phase),
        }
    }

    fn strip_mut(&mut self, node_id: &str) -> &mut ThumbnailStrip {
        let click_slop_px = self.click_slop_px;
        self.thumbnails
            .entry(node_id.to_owned())
            .or_insert_with(|| ThumbnailStrip::new(click_slop_px))
    }

    /// Host-reported scrollable width of a strip.
    pub fn set_thumbnail_extent(&mut self, node_id: &str, max_scroll_left: f64) -> TimelineResult<()> {
        if !max_scroll_left.is_finite() || max_scroll_left < 0.0 {
            return Err(TimelineError::InvalidData(
                "thumbnail max scroll must be finite and >= 0".to_owned(),
            ));
        }
        let strip = self.strip_mut(node_id);
        strip.max_scroll_left = Some(max_scroll_left);
        strip.scroll_left = strip.clamp(strip.scroll_left);
        Ok(())
    }

    /// Mirrors a native scroll (wheel, scrollbar) into the strip state.
    pub fn set_thumbnail_scroll_left(&mut self, node_id: &str, scroll_left: f64) -> TimelineResult<()> {
        if !scroll_left.is_finite() {
            return Err(TimelineError::InvalidData(
                "thumbnail scroll position must be finite".to_owned(),
            ));
        }
        let strip = self.strip_mut(node_id);
        strip.scroll_left = strip.clamp(scroll_left);
        Ok(())
    }

    /// Drops strips whose node is gone.
    pub fn retain_thumbnails<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.thumbnails.retain(|node_id, _| keep(node_id));
        if let Some(SurfaceKind::Thumbnail(node_id)) = &self.active {
            if !self.thumbnails.contains_key(node_id) {
                self.active = None;
            }
        }
    }

    /// Starts a gesture on the outer track.
    pub fn press_outer(&mut self, x: f64, base_offset: f64) -> TimelineResult<()> {
        self.abort_active();
        self.outer.press(x, base_offset)?;
        self.suppress_next_click = false;
        self.active = Some(SurfaceKind::Outer);
        Ok(())
    }

    /// Starts a gesture on a thumbnail strip; the outer track is not touched.
    pub fn press_thumbnail(&mut self, node_id: &str, x: f64) -> TimelineResult<()> {
        self.abort_active();
        let strip = self.strip_mut(node_id);
        let base = strip.scroll_left;
        strip.surface.press(x, base)?;
        self.suppress_next_click = false;
        self.active = Some(SurfaceKind::Thumbnail(node_id.to_owned()));
        Ok(())
    }

    /// Feeds a pointer move to the pressed surface.
    pub fn move_to(&mut self, x: f64) -> Option<GestureMove> {
        match self.active.clone()? {
            SurfaceKind::Outer => {
                let (session, delta_px) = self.outer.move_to(x)?;
                Some(GestureMove::Outer {
                    base_offset: session.base,
                    delta_px,
                })
            }
            SurfaceKind::Thumbnail(node_id) => {
                let factor = self.thumbnail_drag_factor;
                let strip = self.thumbnails.get_mut(&node_id)?;
                let (session, delta_px) = strip.surface.move_to(x)?;
                strip.scroll_left = strip.clamp(session.base - delta_px * factor);
                trace!(node_id = %node_id, scroll_left = strip.scroll_left, "thumbnail drag");
                Some(GestureMove::Thumbnail {
                    scroll_left: strip.scroll_left,
                    node_id,
                })
            }
        }
    }

    /// Ends the active gesture (pointer up or pointer leave).
    pub fn release(&mut self) -> Option<(SurfaceKind, GestureRelease)> {
        let surface = self.active.take()?;
        let release = match &surface {
            SurfaceKind::Outer => self.outer.release(),
            SurfaceKind::Thumbnail(node_id) => self
                .thumbnails
                .get_mut(node_id)
                .and_then(|strip| strip.surface.release()),
        }?;
        if release.is_drag() {
            self.suppress_next_click = true;
        }
        Some((surface, release))
    }

    /// Cancels any gesture in flight, keeping values already written.
    ///
    /// An interrupted drag still swallows the click that follows.
    pub fn abort_active(&mut self) -> Option<SurfaceKind> {
        let surface = self.active.take()?;
        let phase = match &surface {
            SurfaceKind::Outer => self.outer.abort(),
            SurfaceKind::Thumbnail(node_id) => self
                .thumbnails
                .get_mut(node_id)
                .map_or(GesturePhase::Idle, |strip| strip.surface.abort()),
        };
        if phase == GesturePhase::Dragging {
            self.suppress_next_click = true;
        }
        Some(surface)
    }

    /// Decides whether a click may run. Consumes the post-drag suppression.
    pub fn take_click_permission(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        !std::mem::take(&mut self.suppress_next_click)
    }
}

impl Default for GestureArbiter {
    fn default() -> Self {
        Self::new(super::DEFAULT_CLICK_SLOP_PX, 3.0)
    }
}
