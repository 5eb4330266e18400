use crate::error::{TimelineError, TimelineResult};

use super::{DragFactorPolicy, TimelineEngineConfig};

pub(super) fn validate_container_width(width: f64) -> TimelineResult<f64> {
    if !width.is_finite() || width <= 0.0 {
        return Err(TimelineError::InvalidContainerWidth { width });
    }
    Ok(width)
}

pub(super) fn validate_drag_factor_policy(policy: DragFactorPolicy) -> TimelineResult<DragFactorPolicy> {
    match policy {
        DragFactorPolicy::Fixed { factor } => {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(TimelineError::InvalidData(
                    "drag factor must be finite and > 0".to_owned(),
                ));
            }
        }
        DragFactorPolicy::ScaledBySpan {
            base_factor,
            reference_span_years,
        } => {
            if !base_factor.is_finite() || base_factor <= 0.0 {
                return Err(TimelineError::InvalidData(
                    "scaled drag base_factor must be finite and > 0".to_owned(),
                ));
            }
            if !reference_span_years.is_finite() || reference_span_years <= 0.0 {
                return Err(TimelineError::InvalidData(
                    "scaled drag reference_span_years must be finite and > 0".to_owned(),
                ));
            }
        }
    }
    Ok(policy)
}

pub(super) fn validate_engine_config(config: &TimelineEngineConfig) -> TimelineResult<()> {
    validate_container_width(config.container_width_px)?;
    validate_drag_factor_policy(config.drag_factor)?;
    if !config.scroll_step_percent.is_finite() || config.scroll_step_percent <= 0.0 {
        return Err(TimelineError::InvalidData(
            "scroll step percent must be finite and > 0".to_owned(),
        ));
    }
    if !config.thumbnail_drag_factor.is_finite() || config.thumbnail_drag_factor <= 0.0 {
        return Err(TimelineError::InvalidData(
            "thumbnail drag factor must be finite and > 0".to_owned(),
        ));
    }
    if !config.click_slop_px.is_finite() || config.click_slop_px < 0.0 {
        return Err(TimelineError::InvalidData(
            "click slop must be finite and >= 0".to_owned(),
        ));
    }
    if config.default_min_year > config.default_max_year {
        return Err(TimelineError::InvalidData(
            "default year range must satisfy min <= max".to_owned(),
        ));
    }
    let keys = &config.storage_keys;
    if keys.offset.is_empty() || keys.scroll_top.is_empty() || keys.last_viewed_node.is_empty() {
        return Err(TimelineError::InvalidData(
            "storage keys must not be empty".to_owned(),
        ));
    }
    if keys.offset == keys.scroll_top
        || keys.offset == keys.last_viewed_node
        || keys.scroll_top == keys.last_viewed_node
    {
        return Err(TimelineError::InvalidData(
            "storage keys must be distinct".to_owned(),
        ));
    }
    Ok(())
}
