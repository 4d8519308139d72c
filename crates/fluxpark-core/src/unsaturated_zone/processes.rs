//! Reservoir process functions.

/// Replenish the deficit with inflow.
///
/// Returns (deficit, surplus). Inflow beyond a zero deficit is surplus.
pub fn wetting(inflow: f64, old_deficit: f64) -> (f64, f64) {
    let deficit = old_deficit - inflow;
    if deficit < 0.0 {
        (0.0, -deficit)
    } else {
        (deficit, 0.0)
    }
}

/// Water-stress reduction factor on the demand.
///
/// One up to the stress threshold, linear to zero at wilting point.
pub fn reduction_factor(deficit: f64, soilm_scp: f64, soilm_pwp: f64) -> f64 {
    if deficit <= soilm_scp {
        1.0
    } else if soilm_pwp > soilm_scp {
        ((soilm_pwp - deficit) / (soilm_pwp - soilm_scp)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Root-zone uptake: reduced demand, limited by the water left above wilting point.
pub fn uptake(demand: f64, factor: f64, deficit: f64, soilm_pwp: f64) -> f64 {
    (demand * factor).min(soilm_pwp - deficit).max(0.0)
}
