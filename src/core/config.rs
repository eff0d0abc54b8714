use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::axis::Axis;
use crate::error::{AxisError, AxisResult};

/// Per-axis configuration snapshot handed over by the option system.
///
/// `None` fields mean "auto": bounds are computed from the data, the step
/// from the nice-number policy, ticks by the generator. Non-empty tick lists
/// switch the matching tick set to user mode and are installed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AxisConfig {
    #[serde(default)]
    pub log_scale: bool,
    #[serde(default)]
    pub loose: bool,
    #[serde(default)]
    pub descending: bool,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub step: Option<f64>,
    #[serde(default)]
    pub minor_tick_count: Option<usize>,
    #[serde(default)]
    pub major_ticks: Option<Vec<f64>>,
    #[serde(default)]
    pub minor_ticks: Option<Vec<f64>>,
}

impl AxisConfig {
    /// Rejects combinations the scalers must never see.
    ///
    /// All validation happens here, at configuration time; an accepted
    /// config makes the subsequent layout pass infallible (§ allocation
    /// aside).
    fn validate(&self) -> AxisResult<()> {
        for (name, bound) in [("min", self.min), ("max", self.max)] {
            if let Some(value) = bound
                && !value.is_finite()
            {
                return Err(AxisError::InvalidConfig(format!(
                    "axis {name} must be finite, got {value}"
                )));
            }
        }

        if let (Some(min), Some(max)) = (self.min, self.max)
            && min >= max
        {
            return Err(AxisError::InvalidBounds { min, max });
        }

        if self.log_scale
            && let Some(min) = self.min
            && min <= 0.0
        {
            return Err(AxisError::NonPositiveLogBound(min));
        }

        if let Some(step) = self.step
            && !step.is_finite()
        {
            return Err(AxisError::InvalidConfig(format!(
                "axis step must be finite, got {step}"
            )));
        }

        Ok(())
    }
}

impl Axis {
    /// Applies a configuration snapshot.
    ///
    /// Validation runs before any mutation: a rejected config leaves the
    /// axis exactly as it was, and the widget keeps rendering with the
    /// previous valid state. An accepted config marks the axis dirty.
    pub fn apply_config(&mut self, config: &AxisConfig) -> AxisResult<()> {
        config.validate()?;

        self.log_scale = config.log_scale;
        self.loose = config.loose;
        self.descending = config.descending;
        self.user_min = config.min;
        self.user_max = config.max;
        self.user_step = config.step;
        self.minor_ticks.set_requested_count(config.minor_tick_count);

        match &config.major_ticks {
            Some(values) if !values.is_empty() => self.major_ticks.set_user_values(values),
            _ => self.major_ticks.clear_user_values(),
        }
        match &config.minor_ticks {
            Some(values) if !values.is_empty() => self.minor_ticks.set_user_values(values),
            _ => self.minor_ticks.clear_user_values(),
        }

        self.mark_dirty();
        debug!(slot = ?self.slot(), "axis configuration applied");
        Ok(())
    }
}
