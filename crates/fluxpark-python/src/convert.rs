use fluxpark_core::grid::{Grid, LandUseGrid};
use fluxpark_core::FluxError;
use numpy::PyReadonlyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Copy a float64 numpy array into an owned grid.
pub fn to_grid(arr: &PyReadonlyArray2<'_, f64>) -> Grid {
    arr.as_array().to_owned()
}

/// Copy an int32 land-use array into an owned grid.
pub fn to_landuse(arr: &PyReadonlyArray2<'_, i32>) -> LandUseGrid {
    arr.as_array().to_owned()
}

/// Surface a core error as `ValueError`.
pub fn value_error(err: FluxError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
