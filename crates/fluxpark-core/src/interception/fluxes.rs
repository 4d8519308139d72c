/// Interception outputs for one cell-timestep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterceptionFluxes {
    /// Evaporation from the wet canopy [mm].
    pub evaporation: f64,
    /// Storage carried to the next step [mm].
    pub store: f64,
    /// Rain reaching the ground [mm].
    pub throughfall: f64,
    /// Fraction of the step the canopy was wet [-].
    pub wet_fraction: f64,
}

impl InterceptionFluxes {
    /// All outputs NaN, for no-data cells.
    pub const NODATA: InterceptionFluxes = InterceptionFluxes {
        evaporation: f64::NAN,
        store: f64::NAN,
        throughfall: f64::NAN,
        wet_fraction: f64::NAN,
    };
}
