//! Heckbert "nice number" rounding.
//!
//! A nice number has the form `f * 10^e` with `f` in `{1, 2, 5, 10}`. Axis
//! autoscaling rounds the raw data span to a nice number first, then derives
//! the major step from a nice fraction of it, so tick labels land on values
//! a reader can add up in their head.

/// Rounds a positive span to a nice number.
///
/// With `round` set, picks the mantissa closest to the input
/// (thresholds 1.5 / 3.0 / 7.0). Without it, picks the smallest nice
/// mantissa that is not below the input (ceiling mode), which guarantees
/// the nice span covers the raw span.
///
/// The caller must guarantee `x > 0`; the scalers never call this with a
/// degenerate span.
#[must_use]
pub fn nice_number(x: f64, round: bool) -> f64 {
    debug_assert!(x > 0.0, "nice_number requires a positive span");

    let exponent = x.log10().floor();
    let power = 10f64.powf(exponent);
    let fraction = x / power;

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * power
}

#[cfg(test)]
mod tests {
    use super::nice_number;

    #[test]
    fn ceiling_mode_covers_the_span() {
        assert_eq!(nice_number(94.0, false), 100.0);
        assert_eq!(nice_number(1.2, false), 2.0);
        assert_eq!(nice_number(0.03, false), 0.05);
        assert_eq!(nice_number(20.0, false), 20.0);
    }

    #[test]
    fn rounding_mode_picks_the_closest_mantissa() {
        assert_eq!(nice_number(25.0, true), 20.0);
        assert_eq!(nice_number(1.4, true), 1.0);
        assert_eq!(nice_number(1.6, true), 2.0);
        assert_eq!(nice_number(3.5, true), 5.0);
        assert_eq!(nice_number(8.0, true), 10.0);
    }

    #[test]
    fn result_mantissa_is_always_nice() {
        for &x in &[0.0004, 0.37, 1.0, 6.2, 94.0, 123_456.0] {
            for &round in &[true, false] {
                let nice = nice_number(x, round);
                let mantissa = nice / 10f64.powf(x.log10().floor());
                assert!(
                    [1.0, 2.0, 5.0, 10.0]
                        .iter()
                        .any(|f| (mantissa - f).abs() < 1e-9),
                    "mantissa {mantissa} for x={x}"
                );
            }
        }
    }
}
