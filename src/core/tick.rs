use smallvec::SmallVec;

use crate::error::{AxisError, AxisResult};

/// Inline capacity for tick storage; most axes carry well under 16 ticks.
const TICK_INLINE: usize = 16;

/// An ordered set of tick positions owned by one axis.
///
/// Values are either produced by [`TickSet::generate`] or installed verbatim
/// by the user via [`TickSet::set_user_values`]. A user-supplied set is never
/// regenerated until the user clears it back to auto mode.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSet {
    requested_count: Option<usize>,
    values: SmallVec<[f64; TICK_INLINE]>,
    generated: bool,
}

impl Default for TickSet {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            requested_count: None,
            values: SmallVec::new(),
            generated: true,
        }
    }

    /// Returns the user-requested tick/subdivision count, if any.
    #[must_use]
    pub fn requested_count(&self) -> Option<usize> {
        self.requested_count
    }

    pub fn set_requested_count(&mut self, count: Option<usize>) {
        self.requested_count = count;
    }

    /// Returns whether the engine owns the values (auto mode).
    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Installs a user-supplied tick list verbatim, in the order given.
    ///
    /// No range filtering happens here; out-of-range values are skipped by
    /// the consumer at draw time.
    pub fn set_user_values(&mut self, values: &[f64]) {
        self.values.clear();
        self.values.extend_from_slice(values);
        self.generated = false;
    }

    /// Returns the set to auto mode; the next rescale regenerates it.
    pub fn clear_user_values(&mut self) {
        if !self.generated {
            self.values = SmallVec::new();
            self.generated = true;
        }
    }

    /// Replaces the values with an engine-computed list, keeping auto mode.
    ///
    /// Used for the fixed per-decade minor table, which is precomputed
    /// rather than swept.
    pub(crate) fn set_generated_values(&mut self, values: &[f64]) {
        self.values.clear();
        self.values.extend_from_slice(values);
        self.generated = true;
    }

    /// Fills the set with exactly `count` values, starting at `start` and
    /// advancing by `step`.
    ///
    /// Each value is snapped to the nearest multiple of `step` before the
    /// next start is derived from it, so long runs do not accumulate
    /// floating-point drift. A zero count empties the set and releases any
    /// heap storage it held.
    pub fn generate(&mut self, start: f64, step: f64, count: usize) -> AxisResult<()> {
        self.values.clear();
        if count == 0 {
            self.values = SmallVec::new();
            self.generated = true;
            return Ok(());
        }

        self.values
            .try_reserve(count)
            .map_err(|_| AxisError::ResourceExhausted { requested: count })?;

        let mut cursor = start;
        for _ in 0..count {
            let value = if step != 0.0 {
                (cursor / step).round() * step
            } else {
                cursor
            };
            self.values.push(value);
            cursor = value + step;
        }
        self.generated = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TickSet;

    #[test]
    fn generate_produces_exact_count_on_step_multiples() {
        let mut ticks = TickSet::new();
        ticks.generate(0.0, 20.0, 6).expect("generate");
        assert_eq!(ticks.values(), &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn generate_snaps_each_value_before_advancing() {
        let mut ticks = TickSet::new();
        // A start slightly off the grid snaps onto it immediately.
        ticks.generate(0.1 + 1e-13, 0.1, 5).expect("generate");
        for (i, value) in ticks.values().iter().enumerate() {
            let expected = 0.1 * (i as f64 + 1.0);
            assert!((value - expected).abs() < 1e-12, "tick {i} = {value}");
        }
    }

    #[test]
    fn zero_count_empties_and_releases_storage() {
        let mut ticks = TickSet::new();
        ticks.generate(0.0, 1.0, 64).expect("generate");
        assert_eq!(ticks.len(), 64);
        ticks.generate(0.0, 1.0, 0).expect("generate empty");
        assert!(ticks.is_empty());
        assert!(ticks.is_generated());
    }

    #[test]
    fn user_values_survive_until_cleared() {
        let mut ticks = TickSet::new();
        ticks.set_user_values(&[5.0, 1.0, 3.0]);
        assert!(!ticks.is_generated());
        // Insertion order is preserved, never sorted.
        assert_eq!(ticks.values(), &[5.0, 1.0, 3.0]);

        ticks.clear_user_values();
        assert!(ticks.is_generated());
        assert!(ticks.is_empty());
    }
}
