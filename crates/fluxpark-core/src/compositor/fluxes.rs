/// Composed flux outputs.
///
/// `CellFluxes` holds one cell-timestep; `FluxGrids` (generated) holds the
/// whole domain, one grid per field. Field order is the fixed output order.
use fluxpark_macros::GridFields;

/// Outputs of one cell-timestep, in output order.
#[derive(Debug, Clone, Copy, PartialEq, GridFields)]
#[grid(name = "FluxGrids")]
pub struct CellFluxes {
    /// Evaporation from the wet canopy [mm].
    pub int_evap: f64,
    /// Interception storage after the step [mm].
    pub int_store: f64,
    /// Rain reaching the ground [mm].
    pub throughfall: f64,
    /// Fraction of the step the canopy was wet [-].
    pub int_timefrac: f64,
    /// Soil evaporation estimate from the depletion curve [mm].
    pub soil_evap_act_est: f64,
    /// Cumulative potential soil evaporation [mm].
    pub sum_ep: f64,
    /// Cumulative actual soil evaporation [mm].
    pub sum_ea: f64,
    /// Actual evapotranspiration from the root zone [mm].
    pub eta: f64,
    /// Root-zone deficit had the demand been met [mm].
    pub smdp: f64,
    /// Root-zone deficit after actual uptake [mm].
    pub smda: f64,
    /// Water the root zone could not retain [mm].
    pub prec_surplus: f64,
    /// Share of `eta` attributed to transpiration [-].
    pub eta_trans_frac: f64,
    /// Potential transpiration, `mak * soil_cov` [mm].
    pub trans_pot: f64,
    /// Actual transpiration [mm].
    pub trans_act: f64,
    /// Actual soil evaporation [mm].
    pub soil_evap_act: f64,
    /// Open-water evaporation [mm].
    pub open_water_evap_act: f64,
    /// Transpiration deficit, potential minus actual [mm].
    pub trans_def: f64,
    /// Total actual evaporation [mm].
    pub evap_total_act: f64,
    /// Total potential evaporation [mm].
    pub evap_total_pot: f64,
    /// Root-zone moisture above wilting point [mm].
    pub soilm_root: f64,
    /// Reference precipitation deficit, `-(rain - mak)` [mm].
    pub prec_def_knmi: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_one_outputs_in_order() {
        let names = FluxGrids::field_names();
        assert_eq!(FluxGrids::LEN, 21);
        assert_eq!(names.len(), 21);
        assert_eq!(names[0], "int_evap");
        assert_eq!(names[11], "eta_trans_frac");
        assert_eq!(names[20], "prec_def_knmi");
    }
}
