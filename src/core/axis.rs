use serde::{Deserialize, Serialize};

use crate::core::tick::TickSet;

/// One of the four axis slots a plot can carry.
///
/// `X1`/`Y1` are the primary bottom/left axes, `X2`/`Y2` the secondary
/// top/right axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisSlot {
    X1,
    Y1,
    X2,
    Y2,
}

impl AxisSlot {
    pub const ALL: [Self; 4] = [Self::X1, Self::Y1, Self::X2, Self::Y2];

    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::X1 | Self::X2)
    }
}

/// Recompute state of one axis.
///
/// The axis starts `Dirty` so the first layout pass always rescales it.
/// Configuration or data changes return it to `Dirty`; a completed rescale
/// moves it to `Clean`, after which layout passes reuse the cached ticks
/// and scale/offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisState {
    Clean,
    #[default]
    Dirty,
}

/// An axis limit that may stand for "unbounded".
///
/// Replaces the classic `DBL_MAX` sentinel doubles with a tagged value so no
/// arithmetic ever runs on the sentinel by accident.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElasticBound {
    Finite(f64),
    PositiveInfinity,
    NegativeInfinity,
}

impl ElasticBound {
    /// Classifies a raw value, mapping the IEEE infinities to the tagged
    /// unbounded variants.
    #[must_use]
    pub fn classify(value: f64) -> Self {
        if value == f64::INFINITY {
            Self::PositiveInfinity
        } else if value == f64::NEG_INFINITY {
            Self::NegativeInfinity
        } else {
            Self::Finite(value)
        }
    }

    #[must_use]
    pub fn finite(self) -> Option<f64> {
        match self {
            Self::Finite(value) => Some(value),
            _ => None,
        }
    }
}

/// One coordinate axis: autoscaled display range, tick sets, and the
/// scale/offset pair the pixel transform runs on.
///
/// Owned by the widget for its whole lifetime, one per slot. All mutation
/// goes through the configuration surface ([`Axis::apply_config`]) and the
/// layout pass ([`crate::core::controller::run_layout_pass`]); renderers only
/// read. This is safe purely because the model is single-threaded — a
/// concurrent port would need one exclusive lock per axis covering the
/// dirty-flag transition and the tick-set swap.
#[derive(Debug, Clone)]
pub struct Axis {
    slot: AxisSlot,
    pub(crate) log_scale: bool,
    pub(crate) descending: bool,
    pub(crate) loose: bool,
    pub(crate) mapped: bool,

    pub(crate) user_min: Option<f64>,
    pub(crate) user_max: Option<f64>,
    pub(crate) user_step: Option<f64>,

    pub(crate) data_min: f64,
    pub(crate) data_max: f64,

    pub(crate) min: f64,
    pub(crate) max: f64,
    pub(crate) tick_min: f64,
    pub(crate) tick_max: f64,
    pub(crate) range: f64,
    pub(crate) major_step: f64,

    pub(crate) scale: f64,
    pub(crate) offset: i32,

    pub(crate) prev_min: f64,
    pub(crate) prev_max: f64,
    pub(crate) state: AxisState,

    pub(crate) major_ticks: TickSet,
    pub(crate) minor_ticks: TickSet,
}

impl Axis {
    /// Creates an axis for a slot.
    ///
    /// `prev_min == prev_max == 0` guarantees the first limits pass reports
    /// a change, so the axis is rescaled before anything transforms
    /// through it.
    #[must_use]
    pub fn new(slot: AxisSlot) -> Self {
        Self {
            slot,
            log_scale: false,
            descending: false,
            loose: false,
            mapped: true,
            user_min: None,
            user_max: None,
            user_step: None,
            data_min: 0.0,
            data_max: 1.0,
            min: 0.0,
            max: 1.0,
            tick_min: 0.0,
            tick_max: 1.0,
            range: 1.0,
            major_step: 1.0,
            scale: 1.0,
            offset: 0,
            prev_min: 0.0,
            prev_max: 0.0,
            state: AxisState::Dirty,
            major_ticks: TickSet::new(),
            minor_ticks: TickSet::new(),
        }
    }

    #[must_use]
    pub fn slot(&self) -> AxisSlot {
        self.slot
    }

    #[must_use]
    pub fn is_log_scale(&self) -> bool {
        self.log_scale
    }

    #[must_use]
    pub fn is_descending(&self) -> bool {
        self.descending
    }

    #[must_use]
    pub fn is_loose(&self) -> bool {
        self.loose
    }

    #[must_use]
    pub fn is_mapped(&self) -> bool {
        self.mapped
    }

    pub fn set_mapped(&mut self, mapped: bool) {
        self.mapped = mapped;
    }

    /// Display range. For log axes both values are in log10 units.
    #[must_use]
    pub fn limits(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Outer tick boundary range; differs from [`Axis::limits`] on tight
    /// axes.
    #[must_use]
    pub fn tick_limits(&self) -> (f64, f64) {
        (self.tick_min, self.tick_max)
    }

    /// Aggregated data extent from the last limits pass.
    #[must_use]
    pub fn data_limits(&self) -> (f64, f64) {
        (self.data_min, self.data_max)
    }

    #[must_use]
    pub fn range(&self) -> f64 {
        self.range
    }

    #[must_use]
    pub fn major_step(&self) -> f64 {
        self.major_step
    }

    /// Pixels per normalized unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Pixel origin of the axis.
    #[must_use]
    pub fn offset(&self) -> i32 {
        self.offset
    }

    #[must_use]
    pub fn major_ticks(&self) -> &TickSet {
        &self.major_ticks
    }

    #[must_use]
    pub fn minor_ticks(&self) -> &TickSet {
        &self.minor_ticks
    }

    #[must_use]
    pub fn state(&self) -> AxisState {
        self.state
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.state == AxisState::Dirty
    }

    /// Forces a rescale on the next layout pass. Sticky until the pass runs.
    pub fn mark_dirty(&mut self) {
        self.state = AxisState::Dirty;
    }

    /// Installs pixel geometry from the layout collaborator.
    ///
    /// `length_px` becomes the scale (pixels per normalized unit). Geometry
    /// does not touch the scale domain, so the axis is not dirtied.
    pub fn set_pixel_extent(&mut self, offset: i32, length_px: f64) {
        self.offset = offset;
        self.scale = length_px;
    }

    /// Tests whether a tick value intersects the display range.
    ///
    /// The test runs on the normalized position with an epsilon of
    /// `f64::EPSILON` — deliberately loose for a normalized quantity, which
    /// tolerates pixel-rounding at the range edges. Values failing the test
    /// are skipped at draw time, never removed from the tick set.
    #[must_use]
    pub fn tick_in_range(&self, value: f64) -> bool {
        let norm = (value - self.min) / self.range;
        (-f64::EPSILON..=1.0 + f64::EPSILON).contains(&norm)
    }

    /// Expands the stored minor-tick fractions across the major intervals.
    ///
    /// Each minor value is a fraction of one major interval and lands at
    /// `major + major_step * fraction`; candidates outside the display range
    /// are dropped. This is the single consumption rule for both linear and
    /// log axes.
    #[must_use]
    pub fn expanded_minor_ticks(&self) -> Vec<f64> {
        let mut expanded = Vec::new();
        for &major in self.major_ticks.values() {
            for &fraction in self.minor_ticks.values() {
                let candidate = major + self.major_step * fraction;
                if self.tick_in_range(candidate) {
                    expanded.push(candidate);
                }
            }
        }
        expanded
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, AxisSlot, ElasticBound};

    #[test]
    fn elastic_bound_classifies_infinities() {
        assert_eq!(
            ElasticBound::classify(f64::INFINITY),
            ElasticBound::PositiveInfinity
        );
        assert_eq!(
            ElasticBound::classify(f64::NEG_INFINITY),
            ElasticBound::NegativeInfinity
        );
        assert_eq!(ElasticBound::classify(2.5).finite(), Some(2.5));
        assert_eq!(ElasticBound::PositiveInfinity.finite(), None);
    }

    #[test]
    fn new_axis_starts_dirty_with_zero_previous_limits() {
        let axis = Axis::new(AxisSlot::X1);
        assert!(axis.is_dirty());
        assert_eq!(axis.prev_min, 0.0);
        assert_eq!(axis.prev_max, 0.0);
        assert!(axis.min < axis.max);
    }

    #[test]
    fn slot_orientation() {
        assert!(AxisSlot::X1.is_horizontal());
        assert!(AxisSlot::X2.is_horizontal());
        assert!(!AxisSlot::Y1.is_horizontal());
        assert!(!AxisSlot::Y2.is_horizontal());
    }
}
