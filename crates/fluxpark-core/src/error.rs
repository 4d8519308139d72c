/// Error type shared by every fallible boundary of the core.
use thiserror::Error;

/// Errors raised while validating grids, parameters and configuration.
///
/// Validation happens before any computation; a returned error means no
/// output was produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FluxError {
    #[error("grid `{name}` has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        name: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("{name} = {value} at cell ({row}, {col}) is out of bounds [{min}, {max}]")]
    OutOfRangeParameter {
        name: &'static str,
        value: f64,
        row: usize,
        col: usize,
        min: f64,
        max: f64,
    },

    #[error("unknown output grid `{0}`")]
    UnknownOutput(String),

    #[error("invalid configuration: {name} = {value}")]
    InvalidConfig { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, FluxError>;
