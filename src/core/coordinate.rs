use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Year at the visual center of the axis, in percent.
pub const CENTER_PERCENT: f64 = 50.0;

/// Default number of steps between the first and last year mark.
pub const DEFAULT_YEAR_MARK_DIVISIONS: usize = 20;

pub type YearMarks = SmallVec<[i32; 24]>;

/// Maps a year to its horizontal position in percent of the container.
///
/// `time_range` must be `> 0`; [`YearAxis`] substitutes `1` for single-year
/// datasets. Results outside `0..=100` are valid and render off-screen.
#[must_use]
pub fn position(year: f64, min_year: f64, time_range: f64, offset: f64) -> f64 {
    year_percent(year, min_year, time_range) + offset
}

/// Position of `year` before the viewport offset is applied.
#[must_use]
pub fn year_percent(year: f64, min_year: f64, time_range: f64) -> f64 {
    ((year - min_year) / time_range) * 100.0
}

/// Offset that places `year` at [`CENTER_PERCENT`].
#[must_use]
pub fn centering_offset(year: f64, min_year: f64, time_range: f64) -> f64 {
    CENTER_PERCENT - year_percent(year, min_year, time_range)
}

/// Evenly spaced, rounded tick years from `min_year` to `max_year` inclusive.
///
/// Produces `divisions + 1` marks; an empty span yields no marks.
#[must_use]
pub fn year_marks(min_year: i32, max_year: i32, divisions: usize) -> YearMarks {
    let span = f64::from(max_year) - f64::from(min_year);
    if span == 0.0 || divisions == 0 {
        return YearMarks::new();
    }
    let steps = divisions as f64;
    (0..=divisions)
        .map(|step| (f64::from(min_year) + span * step as f64 / steps).round() as i32)
        .collect()
}

/// Year bounds of the rendered dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearAxis {
    min_year: i32,
    max_year: i32,
}

impl YearAxis {
    /// Builds an axis; bounds are swapped when given in reverse.
    #[must_use]
    pub fn new(min_year: i32, max_year: i32) -> Self {
        Self {
            min_year: min_year.min(max_year),
            max_year: min_year.max(max_year),
        }
    }

    #[must_use]
    pub fn min_year(self) -> i32 {
        self.min_year
    }

    #[must_use]
    pub fn max_year(self) -> i32 {
        self.max_year
    }

    /// Raw span in years; zero when every node shares a year.
    #[must_use]
    pub fn span_years(self) -> i32 {
        self.max_year - self.min_year
    }

    /// Span used as a divisor; never zero.
    #[must_use]
    pub fn time_range(self) -> f64 {
        match self.span_years() {
            0 => 1.0,
            span => f64::from(span),
        }
    }

    #[must_use]
    pub fn position(self, year: i32, offset: f64) -> f64 {
        position(
            f64::from(year),
            f64::from(self.min_year),
            self.time_range(),
            offset,
        )
    }

    #[must_use]
    pub fn centering_offset(self, year: i32) -> f64 {
        centering_offset(f64::from(year), f64::from(self.min_year), self.time_range())
    }

    #[must_use]
    pub fn year_marks(self, divisions: usize) -> YearMarks {
        year_marks(self.min_year, self.max_year, divisions)
    }
}
