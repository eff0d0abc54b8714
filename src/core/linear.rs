use crate::core::axis::Axis;
use crate::core::nice::nice_number;
use crate::error::AxisResult;

/// Default target number of major intervals on an autoscaled linear axis.
const DEFAULT_TICK_DIVISIONS: f64 = 4.0;

/// Fraction of the display range added outside each non-pinned bound so
/// symbols at the extremes are not clipped.
const AUTO_PAD_RATIO: f64 = 0.02;

/// Recomputes step sizes, display range and tick sets for a linear axis.
///
/// Expects `data_min < data_max` strictly, which the limits aggregator
/// guarantees.
pub(crate) fn rescale_linear(axis: &mut Axis) -> AxisResult<()> {
    let range = axis.data_max - axis.data_min;

    // An explicit step wins only when it can produce at least one interval
    // inside the range; otherwise fall back to the nice-number ladder.
    let major_step = match axis.user_step {
        Some(step) if step > 0.0 && step < range => step,
        _ => nice_number(nice_number(range, false) / DEFAULT_TICK_DIVISIONS, true),
    };

    // The `+ 0.0` scrubs a negative zero out of the floor result.
    let tick_min = (axis.data_min / major_step).floor() * major_step + 0.0;
    let tick_max = (axis.data_max / major_step).ceil() * major_step + 0.0;
    let num_major = ((tick_max - tick_min) / major_step).round() as usize + 1;

    let (mut min, mut max) = if axis.loose {
        (tick_min, tick_max)
    } else {
        (axis.data_min, axis.data_max)
    };

    let pad = AUTO_PAD_RATIO * (max - min);
    if axis.user_min.is_none() {
        min -= pad;
    }
    if axis.user_max.is_none() {
        max += pad;
    }

    axis.min = min;
    axis.max = max;
    axis.range = max - min;
    axis.tick_min = tick_min;
    axis.tick_max = tick_max;
    axis.major_step = major_step;

    // Minor ticks are fractions of one major interval. A requested count of
    // n subdivides each interval into n parts; the 0.2 step below is an
    // unused sentinel when no subdivisions are wanted.
    let (num_minor, minor_step) = match axis.minor_ticks.requested_count() {
        Some(count) if count > 0 && axis.major_ticks.is_generated() => {
            (count - 1, 1.0 / count as f64)
        }
        _ => (0, 0.2),
    };

    if axis.major_ticks.is_generated() {
        axis.major_ticks.generate(tick_min, major_step, num_major)?;
    }
    if axis.minor_ticks.is_generated() {
        axis.minor_ticks.generate(minor_step, minor_step, num_minor)?;
    }
    Ok(())
}
