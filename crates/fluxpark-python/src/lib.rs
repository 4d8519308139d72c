mod convert;

use numpy::{IntoPyArray, PyReadonlyArray2};
use pyo3::prelude::*;
use pyo3::types::PyTuple;

use crate::convert::{to_grid, to_landuse, value_error};
use fluxpark_core::{compute_fluxes_with_smda, FluxGrids, ProcessRegistry};

#[pyfunction]
fn rust_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Names of the 21 grids returned by `compute_fluxes`, in order.
#[pyfunction]
fn output_names() -> Vec<&'static str> {
    FluxGrids::field_names().to_vec()
}

/// `(process, model)` pairs of the default registry, in call order.
#[pyfunction]
fn process_models() -> Vec<(&'static str, &'static str)> {
    ProcessRegistry::default().entries()
}

/// Compose one timestep.
///
/// All arrays are 2-D with one shape; `landuse_map` is int32, the rest
/// float64. Without `old_smda` the root zone starts at field capacity.
/// Returns a tuple of 21 float64 arrays ordered as `output_names()`.
#[pyfunction]
#[pyo3(signature = (
    mak, rain, int_cap, soil_cov, old_int_store, beta, old_sum_ep, old_sum_ea,
    landuse_map, soil_evap_fact, trans_fact, eta_trans_frac, soilm_scp, soilm_pwp,
    old_smda=None,
))]
#[allow(clippy::too_many_arguments)]
fn compute_fluxes<'py>(
    py: Python<'py>,
    mak: PyReadonlyArray2<'py, f64>,
    rain: PyReadonlyArray2<'py, f64>,
    int_cap: PyReadonlyArray2<'py, f64>,
    soil_cov: PyReadonlyArray2<'py, f64>,
    old_int_store: PyReadonlyArray2<'py, f64>,
    beta: PyReadonlyArray2<'py, f64>,
    old_sum_ep: PyReadonlyArray2<'py, f64>,
    old_sum_ea: PyReadonlyArray2<'py, f64>,
    landuse_map: PyReadonlyArray2<'py, i32>,
    soil_evap_fact: PyReadonlyArray2<'py, f64>,
    trans_fact: PyReadonlyArray2<'py, f64>,
    eta_trans_frac: PyReadonlyArray2<'py, f64>,
    soilm_scp: PyReadonlyArray2<'py, f64>,
    soilm_pwp: PyReadonlyArray2<'py, f64>,
    old_smda: Option<PyReadonlyArray2<'py, f64>>,
) -> PyResult<Bound<'py, PyTuple>> {
    let landuse = to_landuse(&landuse_map);
    let old_smda = match &old_smda {
        Some(arr) => to_grid(arr),
        None => ndarray::Array2::zeros(landuse.dim()),
    };
    let (mak, rain, int_cap, soil_cov) = (
        to_grid(&mak),
        to_grid(&rain),
        to_grid(&int_cap),
        to_grid(&soil_cov),
    );
    let (old_int_store, beta, old_sum_ep, old_sum_ea) = (
        to_grid(&old_int_store),
        to_grid(&beta),
        to_grid(&old_sum_ep),
        to_grid(&old_sum_ea),
    );
    let (soil_evap_fact, trans_fact, eta_trans_frac, soilm_scp, soilm_pwp) = (
        to_grid(&soil_evap_fact),
        to_grid(&trans_fact),
        to_grid(&eta_trans_frac),
        to_grid(&soilm_scp),
        to_grid(&soilm_pwp),
    );

    // Release the GIL while the cells are composed on the rayon pool
    let grids = py
        .allow_threads(|| {
            compute_fluxes_with_smda(
                &mak,
                &rain,
                &int_cap,
                &soil_cov,
                &old_int_store,
                &beta,
                &old_sum_ep,
                &old_sum_ea,
                &landuse,
                &soil_evap_fact,
                &trans_fact,
                &eta_trans_frac,
                &soilm_scp,
                &soilm_pwp,
                &old_smda,
            )
        })
        .map_err(value_error)?;

    PyTuple::new(
        py,
        grids
            .into_named()
            .into_iter()
            .map(|(_, grid)| grid.into_pyarray(py)),
    )
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(rust_version, m)?)?;
    m.add_function(wrap_pyfunction!(output_names, m)?)?;
    m.add_function(wrap_pyfunction!(process_models, m)?)?;
    m.add_function(wrap_pyfunction!(compute_fluxes, m)?)?;
    Ok(())
}
