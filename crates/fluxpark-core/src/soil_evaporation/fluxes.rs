/// Soil evaporation outputs for one cell-timestep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilEvaporationFluxes {
    /// Actual soil evaporation [mm].
    pub evaporation: f64,
    /// Cumulative potential evaporation since wetting [mm].
    pub sum_ep: f64,
    /// Cumulative actual evaporation since wetting [mm].
    pub sum_ea: f64,
}

impl SoilEvaporationFluxes {
    pub const NODATA: SoilEvaporationFluxes = SoilEvaporationFluxes {
        evaporation: f64::NAN,
        sum_ep: f64::NAN,
        sum_ea: f64::NAN,
    };
}
