/// Grid aliases and boundary validation helpers.
///
/// Validation skips NaN cells: NaN marks a no-data cell and is carried
/// through the computation rather than rejected.
use ndarray::Array2;

use crate::error::{FluxError, Result};

/// A floating-point grid of depths or fractions, indexed `[[row, col]]`.
pub type Grid = Array2<f64>;

/// Integer land-use classification grid.
pub type LandUseGrid = Array2<i32>;

/// `(rows, cols)`.
pub type Shape = (usize, usize);

/// Inclusive value range for a grid parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// `[0, +inf)`.
    pub const NON_NEGATIVE: Bounds = Bounds {
        min: 0.0,
        max: f64::INFINITY,
    };

    /// `(0, +inf)`, expressed with the smallest positive normal as lower bound.
    pub const POSITIVE: Bounds = Bounds {
        min: f64::MIN_POSITIVE,
        max: f64::INFINITY,
    };

    /// `[0, 1]`.
    pub const FRACTION: Bounds = Bounds { min: 0.0, max: 1.0 };

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Fail with `ShapeMismatch` unless `grid` has the `expected` shape.
pub fn ensure_shape<T>(name: &'static str, grid: &Array2<T>, expected: Shape) -> Result<()> {
    let found = grid.dim();
    if found != expected {
        return Err(FluxError::ShapeMismatch {
            name,
            expected,
            found,
        });
    }
    Ok(())
}

/// Fail with `OutOfRangeParameter` at the first non-NaN cell that is
/// infinite or outside `bounds`.
pub fn ensure_within(name: &'static str, grid: &Grid, bounds: Bounds) -> Result<()> {
    match grid
        .indexed_iter()
        .find(|&(_, &v)| !v.is_nan() && !(v.is_finite() && bounds.contains(v)))
    {
        Some(((row, col), &value)) => Err(FluxError::OutOfRangeParameter {
            name,
            value,
            row,
            col,
            min: bounds.min,
            max: bounds.max,
        }),
        None => Ok(()),
    }
}

/// Fail unless `lower <= upper` cell-wise (NaN cells skipped).
///
/// Both grids must already share one shape.
pub fn ensure_ordered(name: &'static str, lower: &Grid, upper: &Grid) -> Result<()> {
    let offending = lower
        .indexed_iter()
        .find(|&((r, c), &lo)| lo > upper[[r, c]]);
    match offending {
        Some(((row, col), &value)) => Err(FluxError::OutOfRangeParameter {
            name,
            value,
            row,
            col,
            min: 0.0,
            max: upper[[row, col]],
        }),
        None => Ok(()),
    }
}

/// Sum that skips NaN terms; all-NaN sums to zero.
#[inline]
pub fn nan_sum(values: &[f64]) -> f64 {
    values.iter().filter(|v| !v.is_nan()).sum()
}
