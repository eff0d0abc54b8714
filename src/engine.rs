use tracing::debug;

use crate::core::axis::{Axis, AxisSlot};
use crate::core::config::AxisConfig;
use crate::core::controller::run_layout_pass;
use crate::core::limits::SeriesExtent;
use crate::core::stacked::StackedLimitsProvider;
use crate::core::transform::PointTransform;
use crate::error::AxisResult;

/// Which axes rescaled during one layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutReport {
    rescaled: Vec<AxisSlot>,
}

impl LayoutReport {
    #[must_use]
    pub fn rescaled(&self) -> &[AxisSlot] {
        &self.rescaled
    }

    #[must_use]
    pub fn any_rescaled(&self) -> bool {
        !self.rescaled.is_empty()
    }
}

/// The four axis slots a plot widget owns, with their series bindings.
///
/// Created once with the widget and kept for its lifetime. Callers bind the
/// per-series extents published by the data layer, apply configuration
/// snapshots, then drive [`AxisSet::run_layout_pass`] before trusting any
/// scale, offset or tick array — the pass enforces the
/// aggregate-then-rescale ordering for every slot.
#[derive(Debug, Clone)]
pub struct AxisSet {
    axes: [Axis; 4],
    bindings: [Vec<SeriesExtent>; 4],
}

impl Default for AxisSet {
    fn default() -> Self {
        Self::new()
    }
}

fn slot_index(slot: AxisSlot) -> usize {
    match slot {
        AxisSlot::X1 => 0,
        AxisSlot::Y1 => 1,
        AxisSlot::X2 => 2,
        AxisSlot::Y2 => 3,
    }
}

impl AxisSet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            axes: [
                Axis::new(AxisSlot::X1),
                Axis::new(AxisSlot::Y1),
                Axis::new(AxisSlot::X2),
                Axis::new(AxisSlot::Y2),
            ],
            bindings: [Vec::new(), Vec::new(), Vec::new(), Vec::new()],
        }
    }

    #[must_use]
    pub fn axis(&self, slot: AxisSlot) -> &Axis {
        &self.axes[slot_index(slot)]
    }

    #[must_use]
    pub fn axis_mut(&mut self, slot: AxisSlot) -> &mut Axis {
        &mut self.axes[slot_index(slot)]
    }

    /// Applies a configuration snapshot to one slot; rejection leaves the
    /// slot untouched.
    pub fn apply_config(&mut self, slot: AxisSlot, config: &AxisConfig) -> AxisResult<()> {
        self.axis_mut(slot).apply_config(config)
    }

    /// Replaces the series extents bound to one slot.
    ///
    /// Limit changes are picked up by the next pass through the previous-
    /// limits comparison; no explicit dirtying is needed for data motion.
    pub fn bind_series(&mut self, slot: AxisSlot, extents: Vec<SeriesExtent>) {
        debug!(?slot, series = extents.len(), "series extents bound");
        self.bindings[slot_index(slot)] = extents;
    }

    /// Installs pixel geometry from the layout collaborator for one slot.
    pub fn set_pixel_extent(&mut self, slot: AxisSlot, offset: i32, length_px: f64) {
        self.axis_mut(slot).set_pixel_extent(offset, length_px);
    }

    /// Runs the layout pass over all four slots without stacked-bar input.
    pub fn run_layout_pass(&mut self) -> AxisResult<LayoutReport> {
        self.run_layout_pass_stacked(None, &[])
    }

    /// Runs the layout pass, feeding a stacked-sum extent into the named
    /// (y-axis) slots.
    pub fn run_layout_pass_stacked(
        &mut self,
        stacked: Option<&dyn StackedLimitsProvider>,
        stacked_slots: &[AxisSlot],
    ) -> AxisResult<LayoutReport> {
        let mut report = LayoutReport::default();
        for slot in AxisSlot::ALL {
            let index = slot_index(slot);
            let provider = if stacked_slots.contains(&slot) {
                stacked
            } else {
                None
            };
            let rescaled =
                run_layout_pass(&mut self.axes[index], &self.bindings[index], provider)?;
            if rescaled {
                report.rescaled.push(slot);
            }
        }
        Ok(report)
    }

    /// Builds the 2-D point mapping for an (x, y) slot pair.
    #[must_use]
    pub fn point_transform(&self, x_slot: AxisSlot, y_slot: AxisSlot) -> PointTransform<'_> {
        PointTransform::new(self.axis(x_slot), self.axis(y_slot))
    }
}
