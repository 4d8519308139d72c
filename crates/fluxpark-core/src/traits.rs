/// Process traits implemented by the per-cell sub-models.
///
/// Each trait covers one physical process. The compositor only talks to
/// these traits, through a [`ProcessRegistry`](crate::compositor::registry::ProcessRegistry)
/// built once per run.
use crate::interception::fluxes::InterceptionFluxes;
use crate::soil_evaporation::fluxes::SoilEvaporationFluxes;
use crate::unsaturated_zone::fluxes::ReservoirFluxes;

/// Partition rainfall over a canopy.
pub trait InterceptionModel: Send + Sync {
    /// Short identifier of the implementation.
    fn name(&self) -> &'static str;

    /// Execute one cell-timestep.
    ///
    /// `demand` is the evaporative demand of a wet canopy, `capacity` the
    /// interception capacity of full cover, `old_store` the storage left by
    /// the previous step.
    fn step(
        &self,
        demand: f64,
        rain: f64,
        capacity: f64,
        soil_cov: f64,
        old_store: f64,
    ) -> InterceptionFluxes;
}

/// Bare-soil evaporation with persisted cumulative sums.
pub trait SoilEvaporationModel: Send + Sync {
    fn name(&self) -> &'static str;

    /// Execute one cell-timestep given the water reaching the soil and the
    /// potential soil evaporation.
    fn step(
        &self,
        throughfall: f64,
        potential: f64,
        beta: f64,
        old_sum_ep: f64,
        old_sum_ea: f64,
    ) -> SoilEvaporationFluxes;
}

/// Root-zone water store.
pub trait UnsaturatedZoneModel: Send + Sync {
    fn name(&self) -> &'static str;

    /// Execute one cell-timestep. Deficits are depths below field capacity.
    fn step(
        &self,
        inflow: f64,
        demand: f64,
        old_smda: f64,
        soilm_scp: f64,
        soilm_pwp: f64,
    ) -> ReservoirFluxes;
}
