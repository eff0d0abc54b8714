use indexmap::IndexMap;
use ordered_float::OrderedFloat;

/// Supplies the stacked-bar extremum a y-axis must cover.
///
/// A stacked sum can exceed every individual series' extent, so stacked-mode
/// y-axes feed this aggregate into limits aggregation alongside the
/// per-series extents. Implementations are scoped to one layout pass; the
/// engine never retains one across passes.
pub trait StackedLimitsProvider {
    /// Combined (min, max) over all stacked sums, or `None` when nothing
    /// has been stacked.
    fn stacked_extent(&self) -> Option<(f64, f64)>;
}

/// A precomputed stacked extent, for callers that aggregate elsewhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackedExtent {
    pub min: f64,
    pub max: f64,
}

impl StackedLimitsProvider for StackedExtent {
    fn stacked_extent(&self) -> Option<(f64, f64)> {
        Some((self.min, self.max))
    }
}

/// Per-abscissa stacked-sum accumulator.
///
/// Bar segments sharing an abscissa stack: positive values accumulate
/// upward, negative values downward. The table only retains the two running
/// sums per abscissa, in insertion order; segment geometry stays with the
/// bar-layout collaborator.
#[derive(Debug, Clone, Default)]
pub struct StackedSumTable {
    sums: IndexMap<OrderedFloat<f64>, (f64, f64)>,
}

impl StackedSumTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stacks one bar segment at `abscissa`.
    ///
    /// Non-finite values are ignored; the aggregator must never see them.
    pub fn push(&mut self, abscissa: f64, value: f64) {
        if !value.is_finite() || !abscissa.is_finite() {
            return;
        }
        let entry = self.sums.entry(OrderedFloat(abscissa)).or_insert((0.0, 0.0));
        if value < 0.0 {
            entry.0 += value;
        } else {
            entry.1 += value;
        }
    }

    pub fn clear(&mut self) {
        self.sums.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sums.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }
}

impl StackedLimitsProvider for StackedSumTable {
    fn stacked_extent(&self) -> Option<(f64, f64)> {
        if self.sums.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &(down, up) in self.sums.values() {
            min = min.min(down);
            max = max.max(up);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::{StackedLimitsProvider, StackedSumTable};

    #[test]
    fn sums_stack_per_abscissa_with_signed_split() {
        let mut table = StackedSumTable::new();
        table.push(1.0, 3.0);
        table.push(1.0, 4.0);
        table.push(2.0, 5.0);
        table.push(2.0, -2.0);

        // Positive segments at x=1 stack to 7, the negative one at x=2 to -2.
        assert_eq!(table.stacked_extent(), Some((-2.0, 7.0)));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn empty_table_reports_no_extent() {
        let table = StackedSumTable::new();
        assert_eq!(table.stacked_extent(), None);
    }

    #[test]
    fn non_finite_segments_are_ignored() {
        let mut table = StackedSumTable::new();
        table.push(1.0, f64::NAN);
        table.push(f64::INFINITY, 2.0);
        assert!(table.is_empty());
    }
}
