pub mod axis;
pub mod config;
pub mod controller;
pub mod limits;
pub mod linear;
pub mod log;
pub mod nice;
pub mod stacked;
pub mod tick;
pub mod transform;

pub use axis::{Axis, AxisSlot, AxisState, ElasticBound};
pub use config::AxisConfig;
pub use controller::{Scaler, run_layout_pass};
pub use limits::{SeriesExtent, aggregate_limits};
pub use nice::nice_number;
pub use stacked::{StackedExtent, StackedLimitsProvider, StackedSumTable};
pub use tick::TickSet;
pub use transform::PointTransform;
