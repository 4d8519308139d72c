//! Boesten-Stroosnijder process functions.
//!
//! Pure functions on the cumulative sums. The depletion curve is
//! `sum_ea = sum_ep` for `sum_ep <= beta²` and `sum_ea = beta * sqrt(sum_ep)`
//! above; both branches meet at `beta²`, so the curve is continuous with a
//! slope never above one.

/// Cumulative actual evaporation for a cumulative potential evaporation.
#[inline]
pub fn cumulative_actual(sum_ep: f64, beta: f64) -> f64 {
    if sum_ep <= beta * beta {
        sum_ep
    } else {
        beta * sum_ep.sqrt()
    }
}

/// Inverse of [`cumulative_actual`].
#[inline]
pub fn cumulative_potential(sum_ea: f64, beta: f64) -> f64 {
    if sum_ea <= beta * beta {
        sum_ea
    } else {
        let ratio = sum_ea / beta;
        ratio * ratio
    }
}

/// Drying step: water input below potential evaporation.
///
/// The unmet demand extends the dry spell. Returns (ea, sum_ep, sum_ea).
pub fn drying_step(
    water_in: f64,
    potential: f64,
    beta: f64,
    old_sum_ep: f64,
    old_sum_ea: f64,
) -> (f64, f64, f64) {
    let sum_ep = old_sum_ep + (potential - water_in);
    let sum_ea = cumulative_actual(sum_ep, beta);
    let ea = water_in + sum_ea - old_sum_ea;
    (ea, sum_ep, sum_ea)
}

/// Wetting step: water input at or above potential evaporation.
///
/// Evaporation runs at the potential rate; the surplus water is deducted
/// from the cumulative actual sum and the potential sum is re-derived from
/// it. Returns (ea, sum_ep, sum_ea).
pub fn wetting_step(water_in: f64, potential: f64, beta: f64, old_sum_ea: f64) -> (f64, f64, f64) {
    let sum_ea = (old_sum_ea - (water_in - potential)).max(0.0);
    let sum_ep = cumulative_potential(sum_ea, beta);
    (potential, sum_ep, sum_ea)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected} +/- {tol}, got {actual}"
        );
    }

    const BETA: f64 = 1.75;

    #[test]
    fn curve_linear_below_threshold() {
        assert_eq!(cumulative_actual(2.0, BETA), 2.0);
    }

    #[test]
    fn curve_sqrt_above_threshold() {
        assert_approx(cumulative_actual(9.0, BETA), 5.25, 1e-12);
    }

    #[test]
    fn curve_continuous_at_threshold() {
        let b2 = BETA * BETA;
        assert_approx(cumulative_actual(b2, BETA), b2, 1e-12);
        assert_approx(cumulative_actual(b2 + 1e-9, BETA), b2, 1e-6);
    }

    #[test]
    fn inverse_roundtrip() {
        for &ep in &[0.0, 1.0, 3.0, 9.0, 40.0] {
            let ea = cumulative_actual(ep, BETA);
            assert_approx(cumulative_potential(ea, BETA), ep, 1e-9);
        }
    }

    #[test]
    fn first_dry_day_at_potential() {
        let (ea, sum_ep, sum_ea) = drying_step(0.0, 2.0, BETA, 0.0, 0.0);
        assert_approx(ea, 2.0, 1e-12);
        assert_approx(sum_ep, 2.0, 1e-12);
        assert_approx(sum_ea, 2.0, 1e-12);
    }

    #[test]
    fn dry_spell_reduces_evaporation() {
        let (ea, sum_ep, sum_ea) = drying_step(0.0, 2.0, BETA, 2.0, 2.0);
        assert_approx(sum_ep, 4.0, 1e-12);
        assert_approx(sum_ea, 3.5, 1e-12);
        assert_approx(ea, 1.5, 1e-12);
    }

    #[test]
    fn light_rain_counts_as_evaporation() {
        // ea >= water input on a drying day
        let (ea, _, _) = drying_step(0.5, 2.0, BETA, 9.0, 5.25);
        assert!(ea >= 0.5);
        assert!(ea <= 2.0);
    }

    #[test]
    fn heavy_rain_resets_sums() {
        let (ea, sum_ep, sum_ea) = wetting_step(5.0, 1.0, BETA, 3.5);
        assert_eq!(ea, 1.0);
        assert_eq!(sum_ea, 0.0);
        assert_eq!(sum_ep, 0.0);
    }

    #[test]
    fn moderate_rain_shrinks_sums() {
        let (ea, sum_ep, sum_ea) = wetting_step(2.0, 1.0, BETA, 5.25);
        assert_eq!(ea, 1.0);
        assert_approx(sum_ea, 4.25, 1e-12);
        assert_approx(sum_ep, (4.25 / BETA) * (4.25 / BETA), 1e-12);
    }
}
