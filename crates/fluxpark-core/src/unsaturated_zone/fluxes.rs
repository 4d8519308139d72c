/// Reservoir outputs for one cell-timestep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReservoirFluxes {
    /// Actual evapotranspiration drawn from the root zone [mm].
    pub eta: f64,
    /// Deficit had the full demand been met [mm].
    pub smdp: f64,
    /// Deficit after actual uptake, carried to the next step [mm].
    pub smda: f64,
    /// Inflow the full reservoir could not retain [mm].
    pub prec_surplus: f64,
}

impl ReservoirFluxes {
    pub const NODATA: ReservoirFluxes = ReservoirFluxes {
        eta: f64::NAN,
        smdp: f64::NAN,
        smda: f64::NAN,
        prec_surplus: f64::NAN,
    };
}
