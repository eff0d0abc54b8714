//! axis-rs: axis auto-scaling, tick generation and coordinate transforms
//! for 2-D charting widgets.
//!
//! For each of up to four axis slots (primary/secondary horizontal and
//! vertical) the engine derives a numerically "nice" display range and step
//! size from the plotted data, generates major and minor tick positions
//! (linear or logarithmic), and provides the bidirectional data ⇄ pixel
//! mapping the surrounding widget renders, hit-tests and exports with.

pub mod core;
pub mod engine;
pub mod error;
pub mod telemetry;

pub use crate::core::{Axis, AxisConfig, AxisSlot, PointTransform, SeriesExtent, TickSet};
pub use crate::engine::{AxisSet, LayoutReport};
pub use crate::error::{AxisError, AxisResult};
