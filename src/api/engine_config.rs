use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, DEFAULT_YEAR_MARK_DIVISIONS};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::DEFAULT_CLICK_SLOP_PX;

/// How pixel drag deltas are amplified into offset percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragFactorPolicy {
    /// Same multiplier regardless of dataset span.
    Fixed { factor: f64 },
    /// `base_factor * time_range / reference_span_years`.
    ScaledBySpan {
        base_factor: f64,
        reference_span_years: f64,
    },
}

impl DragFactorPolicy {
    #[must_use]
    pub fn effective_factor(self, time_range: f64) -> f64 {
        match self {
            Self::Fixed { factor } => factor,
            Self::ScaledBySpan {
                base_factor,
                reference_span_years,
            } => base_factor * time_range / reference_span_years,
        }
    }
}

impl Default for DragFactorPolicy {
    fn default() -> Self {
        Self::Fixed { factor: 4.0 }
    }
}

/// Session-storage keys used for view persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    pub offset: String,
    pub scroll_top: String,
    pub last_viewed_node: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            offset: "timeline_position".to_owned(),
            scroll_top: "timeline_scroll_position".to_owned(),
            last_viewed_node: "last_viewed_art_movement".to_owned(),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can ship tuning as JSON next to their assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    #[serde(default = "default_container_width_px")]
    pub container_width_px: f64,
    #[serde(default = "default_scroll_step_percent")]
    pub scroll_step_percent: f64,
    #[serde(default)]
    pub drag_factor: DragFactorPolicy,
    #[serde(default = "default_thumbnail_drag_factor")]
    pub thumbnail_drag_factor: f64,
    #[serde(default = "default_click_slop_px")]
    pub click_slop_px: f64,
    #[serde(default = "default_year_mark_divisions")]
    pub year_mark_divisions: usize,
    #[serde(default = "default_min_year")]
    pub default_min_year: i32,
    #[serde(default = "default_max_year")]
    pub default_max_year: i32,
    #[serde(default = "default_deep_link_highlight_ms")]
    pub deep_link_highlight_ms: u64,
    #[serde(default = "default_restore_highlight_ms")]
    pub restore_highlight_ms: u64,
    #[serde(default = "default_selection_highlight_ms")]
    pub selection_highlight_ms: u64,
    #[serde(default)]
    pub navigation_scroll_defer_ms: u64,
    #[serde(default = "default_selection_scroll_defer_ms")]
    pub selection_scroll_defer_ms: u64,
    #[serde(default)]
    pub storage_keys: StorageKeys,
}

impl TimelineEngineConfig {
    #[must_use]
    pub fn new(container_width_px: f64) -> Self {
        Self {
            container_width_px,
            ..Self::default()
        }
    }

    /// Parses a JSON config; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse engine config: {e}")))
    }

    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }

    #[must_use]
    pub fn with_scroll_step_percent(mut self, step: f64) -> Self {
        self.scroll_step_percent = step;
        self
    }

    #[must_use]
    pub fn with_drag_factor(mut self, policy: DragFactorPolicy) -> Self {
        self.drag_factor = policy;
        self
    }

    #[must_use]
    pub fn with_thumbnail_drag_factor(mut self, factor: f64) -> Self {
        self.thumbnail_drag_factor = factor;
        self
    }

    #[must_use]
    pub fn with_click_slop_px(mut self, slop: f64) -> Self {
        self.click_slop_px = slop;
        self
    }

    #[must_use]
    pub fn with_year_mark_divisions(mut self, divisions: usize) -> Self {
        self.year_mark_divisions = divisions;
        self
    }

    /// Axis range shown while no node is visible.
    #[must_use]
    pub fn with_default_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.default_min_year = min_year;
        self.default_max_year = max_year;
        self
    }

    #[must_use]
    pub fn with_highlight_durations(
        mut self,
        deep_link_ms: u64,
        restore_ms: u64,
        selection_ms: u64,
    ) -> Self {
        self.deep_link_highlight_ms = deep_link_ms;
        self.restore_highlight_ms = restore_ms;
        self.selection_highlight_ms = selection_ms;
        self
    }

    #[must_use]
    pub fn with_scroll_deferrals(mut self, navigation_ms: u64, selection_ms: u64) -> Self {
        self.navigation_scroll_defer_ms = navigation_ms;
        self.selection_scroll_defer_ms = selection_ms;
        self
    }

    #[must_use]
    pub fn with_storage_keys(mut self, keys: StorageKeys) -> Self {
        self.storage_keys = keys;
        self
    }
}

impl Default for TimelineEngineConfig {
    fn default() -> Self {
        Self {
            container_width_px: default_container_width_px(),
            scroll_step_percent: default_scroll_step_percent(),
            drag_factor: DragFactorPolicy::default(),
            thumbnail_drag_factor: default_thumbnail_drag_factor(),
            click_slop_px: default_click_slop_px(),
            year_mark_divisions: default_year_mark_divisions(),
            default_min_year: default_min_year(),
            default_max_year: default_max_year(),
            deep_link_highlight_ms: default_deep_link_highlight_ms(),
            restore_highlight_ms: default_restore_highlight_ms(),
            selection_highlight_ms: default_selection_highlight_ms(),
            navigation_scroll_defer_ms: 0,
            selection_scroll_defer_ms: default_selection_scroll_defer_ms(),
            storage_keys: StorageKeys::default(),
        }
    }
}

fn default_container_width_px() -> f64 {
    1000.0
}

fn default_scroll_step_percent() -> f64 {
    50.0
}

fn default_thumbnail_drag_factor() -> f64 {
    3.0
}

fn default_click_slop_px() -> f64 {
    DEFAULT_CLICK_SLOP_PX
}

fn default_year_mark_divisions() -> usize {
    DEFAULT_YEAR_MARK_DIVISIONS
}

fn default_min_year() -> i32 {
    DEFAULT_MIN_YEAR
}

fn default_max_year() -> i32 {
    DEFAULT_MAX_YEAR
}

fn default_deep_link_highlight_ms() -> u64 {
    3_000
}

fn default_restore_highlight_ms() -> u64 {
    2_000
}

fn default_selection_highlight_ms() -> u64 {
    3_000
}

fn default_selection_scroll_defer_ms() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::{DragFactorPolicy, TimelineEngineConfig};

    #[test]
    fn empty_json_yields_defaults() {
        let config = TimelineEngineConfig::from_json_str("{}").expect("config");
        assert_eq!(config, TimelineEngineConfig::default());
        assert_eq!(config.drag_factor, DragFactorPolicy::Fixed { factor: 4.0 });
        assert_eq!(config.storage_keys.offset, "timeline_position");
    }

    #[test]
    fn json_can_select_span_scaled_drag() {
        let config = TimelineEngineConfig::from_json_str(
            r#"{"drag_factor":{"kind":"scaled_by_span","base_factor":4.0,"reference_span_years":100.0}}"#,
        )
        .expect("config");
        assert!((config.drag_factor.effective_factor(50.0) - 2.0).abs() <= 1e-12);
    }
}
