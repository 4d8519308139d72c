/// Reservoir orchestration.
use super::fluxes::ReservoirFluxes;
use super::processes;
use crate::traits::UnsaturatedZoneModel;

/// Execute one cell-timestep of the root-zone bucket.
///
/// Inflow is applied before uptake. `eta <= demand` and the deficit stays
/// within `[0, max(soilm_pwp, old_smda)]`.
pub fn step(
    inflow: f64,
    demand: f64,
    old_smda: f64,
    soilm_scp: f64,
    soilm_pwp: f64,
) -> ReservoirFluxes {
    // Step 1: fill the bucket, spill what does not fit
    let (deficit, prec_surplus) = processes::wetting(inflow, old_smda);

    // Step 2: stress-limited uptake
    let factor = processes::reduction_factor(deficit, soilm_scp, soilm_pwp);
    let eta = processes::uptake(demand, factor, deficit, soilm_pwp);

    ReservoirFluxes {
        eta,
        smdp: deficit + demand.max(0.0),
        smda: deficit + eta,
        prec_surplus,
    }
}

/// Single-layer deficit bucket between a stress threshold and wilting point.
#[derive(Debug, Clone, Copy, Default)]
pub struct BucketReservoir;

impl UnsaturatedZoneModel for BucketReservoir {
    fn name(&self) -> &'static str {
        "unsat_reservoir"
    }

    fn step(
        &self,
        inflow: f64,
        demand: f64,
        old_smda: f64,
        soilm_scp: f64,
        soilm_pwp: f64,
    ) -> ReservoirFluxes {
        step(inflow, demand, old_smda, soilm_scp, soilm_pwp)
    }
}
