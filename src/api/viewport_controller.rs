use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{YearAxis, centering_offset};
use crate::error::{TimelineError, TimelineResult};

use super::config_validation::validate_container_width;

/// Step-scroll button direction.
///
/// `Left` reveals earlier years by shifting content right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Owns the timeline's horizontal pan offset, in percent units.
///
/// The offset is unbounded; the renderer clips. Lifecycle is
/// `new -> mutate* -> snapshot/restore`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportOffsetController {
    offset: f64,
    step_percent: f64,
    drag_base: Option<f64>,
}

impl ViewportOffsetController {
    #[must_use]
    pub fn new(step_percent: f64) -> Self {
        Self {
            offset: 0.0,
            step_percent,
            drag_base: None,
        }
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn step_percent(&self) -> f64 {
        self.step_percent
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_base.is_some()
    }

    pub fn step_scroll(&mut self, direction: ScrollDirection) -> f64 {
        match direction {
            ScrollDirection::Left => self.offset += self.step_percent,
            ScrollDirection::Right => self.offset -= self.step_percent,
        }
        self.offset
    }

    /// Pins the current offset as the base for subsequent `drag_by` calls.
    pub fn begin_drag(&mut self) {
        self.drag_base = Some(self.offset);
    }

    /// Sets `offset = base + (delta_px / width_px) * 100 * drag_factor`.
    ///
    /// Without a prior `begin_drag` the current offset is the base.
    pub fn drag_by(
        &mut self,
        delta_px: f64,
        container_width_px: f64,
        drag_factor: f64,
    ) -> TimelineResult<f64> {
        let width = validate_container_width(container_width_px)?;
        if !delta_px.is_finite() || !drag_factor.is_finite() {
            return Err(TimelineError::InvalidData(
                "drag delta and factor must be finite".to_owned(),
            ));
        }
        let base = self.drag_base.unwrap_or(self.offset);
        let move_percent = (delta_px / width) * 100.0;
        self.offset = base + move_percent * drag_factor;
        trace!(base, delta_px, offset = self.offset, "viewport drag");
        Ok(self.offset)
    }

    /// Commits the dragged offset as the new resting value.
    pub fn end_drag(&mut self) {
        self.drag_base = None;
    }

    /// Places `year` at the 50% mark.
    pub fn center_on_year(&mut self, year: f64, min_year: f64, time_range: f64) -> f64 {
        self.drag_base = None;
        self.offset = centering_offset(year, min_year, time_range);
        self.offset
    }

    pub fn center_on_axis_year(&mut self, axis: YearAxis, year: i32) -> f64 {
        self.center_on_year(f64::from(year), f64::from(axis.min_year()), axis.time_range())
    }

    /// Back to offset `0` with no drag in flight.
    pub fn reset(&mut self) {
        self.drag_base = None;
        self.offset = 0.0;
    }

    #[must_use]
    pub fn snapshot(&self) -> f64 {
        self.offset
    }

    pub fn restore(&mut self, offset: f64) -> TimelineResult<()> {
        if !offset.is_finite() {
            return Err(TimelineError::InvalidData(
                "restored offset must be finite".to_owned(),
            ));
        }
        self.drag_base = None;
        self.offset = offset;
        Ok(())
    }
}

impl Default for ViewportOffsetController {
    fn default() -> Self {
        Self::new(50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrollDirection, ViewportOffsetController};
    use approx::assert_abs_diff_eq;

    #[test]
    fn left_step_increases_offset() {
        let mut controller = ViewportOffsetController::default();
        controller.step_scroll(ScrollDirection::Left);
        controller.step_scroll(ScrollDirection::Left);
        assert_abs_diff_eq!(controller.offset(), 100.0);
        controller.step_scroll(ScrollDirection::Right);
        assert_abs_diff_eq!(controller.offset(), 50.0);
    }

    #[test]
    fn drag_is_relative_to_base_not_cumulative() {
        let mut controller = ViewportOffsetController::default();
        controller.begin_drag();
        controller.drag_by(100.0, 1000.0, 4.0).expect("drag");
        controller.drag_by(200.0, 1000.0, 4.0).expect("drag");
        assert_abs_diff_eq!(controller.offset(), 80.0);
        controller.end_drag();
        controller.begin_drag();
        controller.drag_by(0.0, 1000.0, 4.0).expect("drag");
        assert_abs_diff_eq!(controller.offset(), 80.0);
    }

    #[test]
    fn drag_rejects_invalid_width() {
        let mut controller = ViewportOffsetController::default();
        assert!(controller.drag_by(10.0, 0.0, 4.0).is_err());
        assert!(controller.drag_by(10.0, f64::NAN, 4.0).is_err());
        assert_abs_diff_eq!(controller.offset(), 0.0);
    }

    #[test]
    fn center_on_year_matches_formula() {
        let mut controller = ViewportOffsetController::default();
        let offset = controller.center_on_year(1907.0, 1872.0, 52.0);
        assert_abs_diff_eq!(offset, 50.0 - 35.0 / 52.0 * 100.0, epsilon = 1e-12);
    }

    #[test]
    fn restore_rejects_non_finite() {
        let mut controller = ViewportOffsetController::default();
        assert!(controller.restore(f64::INFINITY).is_err());
        controller.restore(-12.5).expect("restore");
        assert_abs_diff_eq!(controller.snapshot(), -12.5);
    }

    #[test]
    fn reset_drops_offset_and_drag_base() {
        let mut controller = ViewportOffsetController::default();
        controller.step_scroll(ScrollDirection::Left);
        controller.begin_drag();
        controller.reset();
        assert_abs_diff_eq!(controller.offset(), 0.0);
        assert!(!controller.is_dragging());
    }
}
