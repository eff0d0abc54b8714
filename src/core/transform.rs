use crate::core::axis::{Axis, ElasticBound};

impl Axis {
    /// Maps a data value to a pixel coordinate along this axis.
    ///
    /// The infinities are elastic bounds: `+inf` pins the normalized
    /// position to `1.0` and `-inf` to `0.0` before orientation and scaling
    /// apply. On a log axis, non-positive values collapse to the axis's
    /// zero point — a deliberate approximation for elements that straddle
    /// the log domain, not an error.
    #[must_use]
    pub fn transform(&self, value: f64) -> f64 {
        let norm = match ElasticBound::classify(value) {
            ElasticBound::PositiveInfinity => 1.0,
            ElasticBound::NegativeInfinity => 0.0,
            ElasticBound::Finite(raw) => {
                let value = if self.log_scale {
                    if raw > 0.0 { raw.log10() } else { 0.0 }
                } else {
                    raw
                };
                (value - self.min) / self.range
            }
        };
        let norm = if self.descending { 1.0 - norm } else { norm };
        let scaled = norm * self.scale;

        // Screen Y grows downward while data Y grows upward, so vertical
        // axes subtract from the origin.
        if self.slot().is_horizontal() {
            scaled + f64::from(self.offset)
        } else {
            f64::from(self.offset) - scaled
        }
    }

    /// Maps a pixel coordinate back to a data value.
    ///
    /// Exact algebraic inverse of [`Axis::transform`] for finite values;
    /// pixel coordinates are always finite so no sentinel handling is
    /// needed. Log axes exponentiate back to raw data units.
    #[must_use]
    pub fn inv_transform(&self, pixel: f64) -> f64 {
        let scaled = if self.slot().is_horizontal() {
            pixel - f64::from(self.offset)
        } else {
            f64::from(self.offset) - pixel
        };
        let norm = scaled / self.scale;
        let norm = if self.descending { 1.0 - norm } else { norm };
        let value = self.min + norm * self.range;

        if self.log_scale {
            10f64.powf(value)
        } else {
            value
        }
    }
}

/// Composes an (x, y) axis pair into a 2-D point mapping.
#[derive(Debug, Clone, Copy)]
pub struct PointTransform<'a> {
    x_axis: &'a Axis,
    y_axis: &'a Axis,
    transposed: bool,
}

impl<'a> PointTransform<'a> {
    #[must_use]
    pub fn new(x_axis: &'a Axis, y_axis: &'a Axis) -> Self {
        Self {
            x_axis,
            y_axis,
            transposed: false,
        }
    }

    /// Swaps the data coordinates fed to the two axes, for transposed
    /// plots where x data runs vertically.
    #[must_use]
    pub fn with_transposed(mut self, transposed: bool) -> Self {
        self.transposed = transposed;
        self
    }

    /// Maps a data point to pixel coordinates.
    #[must_use]
    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        let (x, y) = if self.transposed { (y, x) } else { (x, y) };
        (self.x_axis.transform(x), self.y_axis.transform(y))
    }

    /// Maps a pixel position back to a data point.
    #[must_use]
    pub fn unmap(&self, pixel_x: f64, pixel_y: f64) -> (f64, f64) {
        let x = self.x_axis.inv_transform(pixel_x);
        let y = self.y_axis.inv_transform(pixel_y);
        if self.transposed { (y, x) } else { (x, y) }
    }
}
