//! Interception process functions.
//!
//! Pure functions for each stage of the canopy bucket. All inputs and
//! outputs are depths for one timestep.

/// Storage capacity of the covered part of the cell [mm].
#[inline]
pub fn effective_capacity(capacity: f64, soil_cov: f64) -> f64 {
    capacity * soil_cov
}

/// Fill the canopy from rain on the covered fraction.
///
/// Returns (fill, wet_store):
/// - fill: rain retained by the canopy [mm]
/// - wet_store: storage after filling [mm]
///
/// A store already above capacity receives no fill.
pub fn canopy_fill(rain: f64, soil_cov: f64, eff_capacity: f64, old_store: f64) -> (f64, f64) {
    let room = (eff_capacity - old_store).max(0.0);
    let fill = (rain * soil_cov).min(room).max(0.0);
    (fill, old_store + fill)
}

/// Evaporate from the wet canopy.
///
/// Returns (evaporation, new_store). Evaporation is limited by the demand
/// over the covered fraction and by the water in store.
pub fn canopy_evaporation(demand: f64, soil_cov: f64, wet_store: f64) -> (f64, f64) {
    let canopy_demand = (demand * soil_cov).max(0.0);
    let evaporation = canopy_demand.min(wet_store);
    (evaporation, wet_store - evaporation)
}

/// Fraction of the timestep during which the canopy was wet.
///
/// The time needed to evaporate the stored water at the canopy demand; a
/// canopy that holds water without any demand stays wet all step.
pub fn wet_fraction(evaporation: f64, demand: f64, soil_cov: f64, wet_store: f64) -> f64 {
    let canopy_demand = demand * soil_cov;
    if canopy_demand > 0.0 {
        (evaporation / canopy_demand).clamp(0.0, 1.0)
    } else if wet_store > 0.0 {
        1.0
    } else {
        0.0
    }
}
