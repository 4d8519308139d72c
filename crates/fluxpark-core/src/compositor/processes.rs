/// Per-cell composition functions.
///
/// Pure arithmetic shared by the compositor: demands fed to the sub-models,
/// the evapotranspiration split, open-water evaporation and the totals.
use super::landuse::LandUseClass;
use crate::grid::nan_sum;

/// Evaporative demand of a wet canopy.
#[inline]
pub fn interception_demand(mak: f64, int_cap: f64, factor: f64) -> f64 {
    mak * factor + int_cap
}

/// Potential evaporation of the exposed soil.
#[inline]
pub fn soil_evaporation_potential(mak: f64, soil_cov: f64, soil_evap_fact: f64) -> f64 {
    mak * ((1.0 - soil_cov) * soil_evap_fact)
}

/// Potential transpiration of the covered fraction.
#[inline]
pub fn transpiration_potential(mak: f64, soil_cov: f64) -> f64 {
    mak * soil_cov
}

/// Crop-factor transpiration, zero while the canopy is wet all step.
#[inline]
pub fn crop_transpiration(mak: f64, trans_fact: f64, soil_cov: f64, wet_fraction: f64) -> f64 {
    mak * trans_fact * soil_cov * (1.0 - wet_fraction)
}

/// Share of actual evapotranspiration attributed to transpiration.
///
/// `trans_pot / (soil_evap_est + trans_pot)`, zero where the denominator is
/// exactly zero.
pub fn transpiration_fraction(trans_pot: f64, soil_evap_est: f64) -> f64 {
    let denominator = trans_pot + soil_evap_est;
    if denominator == 0.0 {
        0.0
    } else {
        trans_pot / denominator
    }
}

/// Split actual evapotranspiration.
///
/// Returns (trans_act, soil_evap_act).
#[inline]
pub fn split_evapotranspiration(eta: f64, trans_fraction: f64) -> (f64, f64) {
    let trans_act = eta * trans_fraction;
    (trans_act, eta - trans_act)
}

/// Open-water evaporation for a land-use class; zero on land.
#[inline]
pub fn open_water_evaporation(mak: f64, class: LandUseClass) -> f64 {
    match class.open_water_factor() {
        Some(factor) => mak * factor,
        None => 0.0,
    }
}

/// Evaporation components summed into a total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaporationTerms {
    pub soil: f64,
    pub transpiration: f64,
    pub interception: f64,
    pub open_water: f64,
}

impl EvaporationTerms {
    /// NaN-skipping total. On open water the open-water term replaces the
    /// land terms.
    pub fn total(&self, class: LandUseClass) -> f64 {
        if class.is_open_water() {
            nan_sum(&[self.open_water])
        } else {
            nan_sum(&[
                self.soil,
                self.transpiration,
                self.interception,
                self.open_water,
            ])
        }
    }
}

/// Climatic precipitation deficit, positive when evaporation exceeds rain.
#[inline]
pub fn precipitation_deficit(rain: f64, mak: f64) -> f64 {
    -(rain - mak)
}
