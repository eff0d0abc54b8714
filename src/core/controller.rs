use tracing::{debug, trace};

use crate::core::axis::{Axis, AxisState};
use crate::core::limits::{SeriesExtent, aggregate_limits};
use crate::core::linear::rescale_linear;
use crate::core::log::rescale_log;
use crate::core::stacked::StackedLimitsProvider;
use crate::error::AxisResult;

/// Closed set of scaling strategies; one is selected per axis per layout
/// pass instead of per-call indirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaler {
    Linear,
    Log,
}

impl Scaler {
    #[must_use]
    pub fn for_axis(axis: &Axis) -> Self {
        if axis.is_log_scale() {
            Self::Log
        } else {
            Self::Linear
        }
    }

    pub fn rescale(self, axis: &mut Axis) -> AxisResult<()> {
        match self {
            Self::Linear => rescale_linear(axis),
            Self::Log => rescale_log(axis),
        }
    }
}

/// Runs one limits-and-scale pass for a single axis.
///
/// The aggregator always runs, and its change report is observed before any
/// scaler: that ordering is what makes `scale`/`offset` and the tick sets
/// trustworthy for every transform issued afterwards in the same pass. The
/// axis is rescaled when it is dirty or the data limits moved, then settles
/// to `Clean`; otherwise the cached ticks and range are reused.
///
/// Returns `true` when a rescale ran.
pub fn run_layout_pass(
    axis: &mut Axis,
    series: &[SeriesExtent],
    stacked: Option<&dyn StackedLimitsProvider>,
) -> AxisResult<bool> {
    let changed = aggregate_limits(axis, series, stacked);

    if axis.is_dirty() || changed {
        let scaler = Scaler::for_axis(axis);
        scaler.rescale(axis)?;
        axis.state = AxisState::Clean;
        debug!(
            slot = ?axis.slot(),
            scaler = ?scaler,
            min = axis.limits().0,
            max = axis.limits().1,
            major_step = axis.major_step(),
            "axis rescaled"
        );
        Ok(true)
    } else {
        trace!(slot = ?axis.slot(), "axis limits unchanged, reusing cached scale");
        Ok(false)
    }
}
