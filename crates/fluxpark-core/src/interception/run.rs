/// Interception orchestration.
///
/// - `step()`: one cell-timestep → InterceptionFluxes
/// - `Voortman`: the registry entry wrapping `step()`
use super::fluxes::InterceptionFluxes;
use super::processes;
use crate::traits::InterceptionModel;

/// Execute one cell-timestep of the canopy bucket.
///
/// Throughfall never exceeds rain; evaporation never exceeds the demand nor
/// the stored plus incoming water.
pub fn step(
    demand: f64,
    rain: f64,
    capacity: f64,
    soil_cov: f64,
    old_store: f64,
) -> InterceptionFluxes {
    // Step 1: capacity of the covered fraction
    let eff_capacity = processes::effective_capacity(capacity, soil_cov);

    // Step 2: fill from rain on the canopy
    let (fill, wet_store) = processes::canopy_fill(rain, soil_cov, eff_capacity, old_store);

    // Step 3: evaporate at the wet-canopy demand
    let (evaporation, store) = processes::canopy_evaporation(demand, soil_cov, wet_store);

    let wet_fraction = processes::wet_fraction(evaporation, demand, soil_cov, wet_store);

    InterceptionFluxes {
        evaporation,
        store,
        throughfall: rain - fill,
        wet_fraction,
    }
}

/// Interception after Voortman: daily canopy bucket with cover-scaled capacity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Voortman;

impl InterceptionModel for Voortman {
    fn name(&self) -> &'static str {
        "voortman"
    }

    fn step(
        &self,
        demand: f64,
        rain: f64,
        capacity: f64,
        soil_cov: f64,
        old_store: f64,
    ) -> InterceptionFluxes {
        step(demand, rain, capacity, soil_cov, old_store)
    }
}
