use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("invalid axis bounds: min={min} must be strictly below max={max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("log axis requires a positive minimum, got {0}")]
    NonPositiveLogBound(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("tick storage exhausted while reserving {requested} values")]
    ResourceExhausted { requested: usize },
}
