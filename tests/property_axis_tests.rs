use axis_rs::core::{
    Axis, AxisConfig, AxisSlot, SeriesExtent, nice_number, run_layout_pass,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn nice_number_mantissa_is_always_nice(
        x in 1e-12f64..1e12,
        round in proptest::bool::ANY
    ) {
        let nice = nice_number(x, round);
        let mantissa = nice / 10f64.powf(x.log10().floor());
        prop_assert!(
            [1.0, 2.0, 5.0, 10.0].iter().any(|f| (mantissa - f).abs() <= 1e-6),
            "x={x} mantissa={mantissa}"
        );
    }

    #[test]
    fn autoscaled_display_range_is_never_degenerate(
        min in -1e6f64..1e6,
        span in 0.0f64..1e6,
        loose in proptest::bool::ANY
    ) {
        let mut axis = Axis::new(AxisSlot::X1);
        axis.apply_config(&AxisConfig { loose, ..AxisConfig::default() })
            .expect("valid config");
        let series = vec![SeriesExtent::new(min, min + span, 8)];
        run_layout_pass(&mut axis, &series, None).expect("layout pass");

        let (display_min, display_max) = axis.limits();
        prop_assert!(display_min < display_max);
    }

    #[test]
    fn loose_tick_bounds_cover_the_data(
        min in -1e6f64..1e6,
        span in 1e-3f64..1e6
    ) {
        let mut axis = Axis::new(AxisSlot::X1);
        axis.apply_config(&AxisConfig { loose: true, ..AxisConfig::default() })
            .expect("valid config");
        let series = vec![SeriesExtent::new(min, min + span, 8)];
        run_layout_pass(&mut axis, &series, None).expect("layout pass");

        let (tick_min, tick_max) = axis.tick_limits();
        let (data_min, data_max) = axis.data_limits();
        prop_assert!(tick_min <= data_min);
        prop_assert!(tick_max >= data_max);
    }

    #[test]
    fn pixel_round_trip_across_orientations(
        min in -1e5f64..1e5,
        span in 1e-3f64..1e5,
        pixel_factor in 0.0f64..1.0,
        descending in proptest::bool::ANY,
        vertical in proptest::bool::ANY
    ) {
        let slot = if vertical { AxisSlot::Y1 } else { AxisSlot::X1 };
        let mut axis = Axis::new(slot);
        axis.apply_config(&AxisConfig { descending, ..AxisConfig::default() })
            .expect("valid config");
        axis.set_pixel_extent(50, 900.0);
        let series = vec![SeriesExtent::new(min, min + span, 8)];
        run_layout_pass(&mut axis, &series, None).expect("layout pass");

        let pixel = if vertical {
            50.0 - 900.0 * pixel_factor
        } else {
            50.0 + 900.0 * pixel_factor
        };
        let value = axis.inv_transform(pixel);
        let back = axis.transform(value);
        // Absolute pixel tolerance: tiny spans far from the origin lose a
        // few bits to cancellation in (value - min), which is invisible at
        // pixel resolution.
        prop_assert!(
            (back - pixel).abs() <= 1e-3,
            "pixel {pixel} -> value {value} -> {back}"
        );
    }

    #[test]
    fn log_round_trip_over_positive_data(
        log_min in -6f64..6.0,
        decades in 0.1f64..8.0,
        factor in 0.0f64..1.0
    ) {
        let data_min = 10f64.powf(log_min);
        let data_max = 10f64.powf(log_min + decades);
        let mut axis = Axis::new(AxisSlot::Y1);
        axis.apply_config(&AxisConfig { log_scale: true, ..AxisConfig::default() })
            .expect("valid config");
        axis.set_pixel_extent(600, 600.0);
        let series = vec![SeriesExtent::new(data_min, data_max, 16)];
        run_layout_pass(&mut axis, &series, None).expect("layout pass");

        let value = 10f64.powf(log_min + decades * factor);
        let pixel = axis.transform(value);
        let back = axis.inv_transform(pixel);
        prop_assert!(
            (back - value).abs() <= 1e-7 * value,
            "value {value} -> pixel {pixel} -> {back}"
        );
    }
}
