use crate::core::axis::Axis;
use crate::core::nice::nice_number;
use crate::error::AxisResult;

/// Widest decade span the per-decade policy handles; anything wider falls
/// back to nice-number steps over decade units.
const MAX_DECADES: f64 = 10.0;

/// Minor-tick positions inside one decade: `log10(1..=9)` as fractions of
/// the decade interval. The leading zero coincides with the major tick.
const DECADE_MINOR_TABLE: [f64; 9] = [
    0.0,
    0.301_029_995_663_981_2,
    0.477_121_254_719_662_44,
    0.602_059_991_327_962_4,
    0.698_970_004_336_018_9,
    0.778_151_250_383_643_6,
    0.845_098_040_014_256_8,
    0.903_089_986_991_943_5,
    0.954_242_509_439_324_9,
];

/// Recomputes decade bounds and tick sets for a logarithmic axis.
///
/// All resulting limits are in log10 units; the transform layer
/// exponentiates back for labels and raw values. Non-positive data limits
/// collapse to the `[0, 1]` decade defaults rather than failing.
pub(crate) fn rescale_log(axis: &mut Axis) -> AxisResult<()> {
    let decade_min = if axis.data_min > 0.0 {
        axis.data_min.log10().floor()
    } else {
        0.0
    };
    let mut decade_max = if axis.data_max > 0.0 {
        axis.data_max.log10().ceil()
    } else {
        1.0
    };
    let decade_range = decade_max - decade_min;

    if decade_range > MAX_DECADES {
        rescale_log_fallback(axis, decade_min, decade_max, decade_range)
    } else {
        if decade_min == decade_max {
            decade_max += 1.0;
        }
        rescale_log_decades(axis, decade_min, decade_max)
    }
}

/// Standard policy: one decade per major tick, minors from the fixed table.
fn rescale_log_decades(axis: &mut Axis, decade_min: f64, decade_max: f64) -> AxisResult<()> {
    let num_major = (decade_max - decade_min) as usize + 1;

    axis.min = decade_min;
    axis.max = decade_max;
    axis.tick_min = decade_min;
    axis.tick_max = decade_max;
    axis.range = decade_max - decade_min;
    axis.major_step = 1.0;

    if axis.major_ticks.is_generated() {
        axis.major_ticks.generate(decade_min, 1.0, num_major)?;
    }
    if axis.minor_ticks.is_generated() {
        axis.minor_ticks.set_generated_values(&DECADE_MINOR_TABLE);
    }
    Ok(())
}

/// Fallback policy for spans wider than ten decades: the decade range is
/// treated as a linear quantity and stepped with nice numbers.
fn rescale_log_fallback(
    axis: &mut Axis,
    decade_min: f64,
    decade_max: f64,
    decade_range: f64,
) -> AxisResult<()> {
    let nice_range = nice_number(decade_range, false);
    let major_step = nice_number(nice_range / 4.0, true);
    let tick_min = (decade_min / major_step).floor() * major_step + 0.0;
    let tick_max = (decade_max / major_step).ceil() * major_step + 0.0;
    let num_major = ((tick_max - tick_min) / major_step).round() as usize + 1;

    // Minor ticks land on whole-decade multiples below the major step. When
    // the major step is itself a power of ten there is no smaller decade
    // multiple, so fall back to plain fifths of the interval.
    let minor_step = 10f64.powf(major_step.log10().floor());
    let (num_minor, minor_fraction) = if minor_step == major_step {
        (4, 0.2)
    } else {
        (
            (major_step / minor_step).round() as usize - 1,
            minor_step / major_step,
        )
    };

    axis.min = tick_min;
    axis.max = tick_max;
    axis.tick_min = tick_min;
    axis.tick_max = tick_max;
    axis.range = tick_max - tick_min;
    axis.major_step = major_step;

    if axis.major_ticks.is_generated() {
        axis.major_ticks.generate(tick_min, major_step, num_major)?;
    }
    if axis.minor_ticks.is_generated() {
        axis.minor_ticks
            .generate(minor_fraction, minor_fraction, num_minor)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{DECADE_MINOR_TABLE, rescale_log};
    use crate::core::axis::{Axis, AxisSlot};

    fn log_axis_with_data(min: f64, max: f64) -> Axis {
        let mut axis = Axis::new(AxisSlot::Y1);
        axis.log_scale = true;
        axis.data_min = min;
        axis.data_max = max;
        axis
    }

    #[test]
    fn minor_table_matches_log10_of_digits() {
        for (i, entry) in DECADE_MINOR_TABLE.iter().enumerate() {
            let expected = ((i + 1) as f64).log10();
            assert!((entry - expected).abs() < 1e-12, "entry {i}");
        }
    }

    #[test]
    fn standard_policy_steps_one_decade_per_major_tick() {
        let mut axis = log_axis_with_data(5.0, 4500.0);
        rescale_log(&mut axis).expect("rescale");

        assert_eq!(axis.limits(), (0.0, 4.0));
        assert_eq!(axis.major_ticks().values(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(axis.minor_ticks().values().len(), 9);
    }

    #[test]
    fn equal_decades_are_bumped_to_a_full_decade() {
        let mut axis = log_axis_with_data(2.0, 9.0);
        rescale_log(&mut axis).expect("rescale");
        assert_eq!(axis.limits(), (0.0, 1.0));
    }

    #[test]
    fn non_positive_data_collapses_to_default_decades() {
        let mut axis = log_axis_with_data(-4.0, -1.0);
        rescale_log(&mut axis).expect("rescale");
        assert_eq!(axis.limits(), (0.0, 1.0));
    }

    #[test]
    fn spans_beyond_ten_decades_use_nice_number_steps() {
        let mut axis = log_axis_with_data(1.0, 1e11);
        rescale_log(&mut axis).expect("rescale");

        // nice(11) = 20, nice(20 / 4) = 5 decades per major tick.
        assert_eq!(axis.major_step(), 5.0);
        assert_eq!(axis.major_ticks().values(), &[0.0, 5.0, 10.0, 15.0]);
        // Minors at whole decades, as fifths of the five-decade interval.
        assert_eq!(axis.minor_ticks().values().len(), 4);
    }

    #[test]
    fn exactly_ten_decades_stays_on_the_per_decade_policy() {
        let mut axis = log_axis_with_data(1.0, 1e10);
        rescale_log(&mut axis).expect("rescale");
        assert_eq!(axis.major_step(), 1.0);
        assert_eq!(axis.major_ticks().len(), 11);
    }
}
