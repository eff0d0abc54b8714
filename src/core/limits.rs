use tracing::trace;

use crate::core::axis::Axis;
use crate::core::stacked::StackedLimitsProvider;

/// Per-series extent tuple published by the data-series collaborator.
///
/// The series owner recomputes it whenever values change; the aggregator
/// only reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesExtent {
    pub min: f64,
    pub max: f64,
    pub points: usize,
    pub visible: bool,
}

impl SeriesExtent {
    #[must_use]
    pub fn new(min: f64, max: f64, points: usize) -> Self {
        Self {
            min,
            max,
            points,
            visible: true,
        }
    }

    fn contributes(&self) -> bool {
        self.visible && self.points > 0
    }
}

/// Default limits used when no visible series is mapped to the axis.
fn empty_default_limits(log_scale: bool) -> (f64, f64) {
    if log_scale { (0.001, 10.0) } else { (-10.0, 10.0) }
}

/// Manufactures a strictly non-degenerate range around a pivot value.
fn range_around(pivot: f64) -> (f64, f64) {
    if pivot == 0.0 {
        (-0.1, 0.1)
    } else {
        let pad = 0.1 * pivot.abs();
        (pivot - pad, pivot + pad)
    }
}

/// Aggregates data limits for one axis and records whether they moved.
///
/// Scans the visible series mapped to the axis, folds in the stacked-sum
/// extent when one is supplied, applies user bound overrides, and
/// manufactures a range for degenerate (single-value) data. Never fails and
/// always leaves `data_min < data_max` strictly.
///
/// Returns `true` when the limits differ from the previous pass; the axis is
/// marked dirty in that case so the controller rescales it.
pub fn aggregate_limits(
    axis: &mut Axis,
    series: &[SeriesExtent],
    stacked: Option<&dyn StackedLimitsProvider>,
) -> bool {
    let (mut min, mut max);

    if let (Some(user_min), Some(user_max)) = (axis.user_min, axis.user_max) {
        // Both bounds pinned: nothing to scan, the config validation already
        // guaranteed user_min < user_max.
        min = user_min;
        max = user_max;
    } else {
        let mut scanned = 0usize;
        min = f64::INFINITY;
        max = f64::NEG_INFINITY;
        for extent in series.iter().filter(|extent| extent.contributes()) {
            min = min.min(extent.min);
            max = max.max(extent.max);
            scanned += 1;
        }
        if scanned == 0 {
            (min, max) = empty_default_limits(axis.log_scale);
        }

        if let Some(provider) = stacked
            && let Some((stacked_min, stacked_max)) = provider.stacked_extent()
        {
            min = min.min(stacked_min);
            max = max.max(stacked_max);
        }

        // A single pinned bound participates in the scan result and serves
        // as the pivot for the degenerate-range policy.
        if let Some(user_min) = axis.user_min {
            min = user_min;
        }
        if let Some(user_max) = axis.user_max {
            max = user_max;
        }

        if min >= max {
            let pivot = axis.user_min.or(axis.user_max).unwrap_or(min);
            (min, max) = range_around(pivot);
            // Pinned bounds stay verbatim even through the manufactured
            // range.
            if let Some(user_min) = axis.user_min {
                min = user_min;
            }
            if let Some(user_max) = axis.user_max {
                max = user_max;
            }
        }
    }

    axis.data_min = min;
    axis.data_max = max;

    let changed = min != axis.prev_min || max != axis.prev_max;
    axis.prev_min = min;
    axis.prev_max = max;
    if changed {
        axis.mark_dirty();
    }
    trace!(slot = ?axis.slot(), min, max, changed, "data limits aggregated");
    changed
}
