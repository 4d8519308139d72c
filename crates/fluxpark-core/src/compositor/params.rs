/// Static parameter grids, constant over a run.
///
/// - `int_cap`: interception capacity of full cover [mm]
/// - `soil_cov`: soil cover fraction [-]
/// - `beta`: soil evaporation shape factor [mm^0.5]
/// - `landuse`: land-use codes
/// - `soil_evap_fact`: soil evaporation potential factor [-]
/// - `trans_fact`: transpiration potential factor [-]
/// - `soilm_scp`: root-zone deficit at the stress threshold [mm]
/// - `soilm_pwp`: root-zone deficit at wilting point [mm]
use crate::error::Result;
use crate::grid::{ensure_ordered, ensure_shape, ensure_within, Grid, LandUseGrid, Shape};
use crate::interception::constants::{INT_CAP_BOUNDS, SOIL_COV_BOUNDS};
use crate::soil_evaporation::constants::{BETA_BOUNDS, SOIL_EVAP_FACT_BOUNDS};
use crate::unsaturated_zone::constants::{SOILM_BOUNDS, TRANS_FACT_BOUNDS};

#[derive(Debug, Clone, PartialEq)]
pub struct StaticGrids {
    pub int_cap: Grid,
    pub soil_cov: Grid,
    pub beta: Grid,
    pub landuse: LandUseGrid,
    pub soil_evap_fact: Grid,
    pub trans_fact: Grid,
    pub soilm_scp: Grid,
    pub soilm_pwp: Grid,
}

impl StaticGrids {
    /// Create new StaticGrids, returning an error on a shape mismatch or an
    /// out-of-range value. The shape is taken from `landuse`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        int_cap: Grid,
        soil_cov: Grid,
        beta: Grid,
        landuse: LandUseGrid,
        soil_evap_fact: Grid,
        trans_fact: Grid,
        soilm_scp: Grid,
        soilm_pwp: Grid,
    ) -> Result<Self> {
        let grids = Self {
            int_cap,
            soil_cov,
            beta,
            landuse,
            soil_evap_fact,
            trans_fact,
            soilm_scp,
            soilm_pwp,
        };
        grids.validate()?;
        Ok(grids)
    }

    pub fn shape(&self) -> Shape {
        self.landuse.dim()
    }

    pub fn validate(&self) -> Result<()> {
        validate_static_grids(
            self.shape(),
            &self.int_cap,
            &self.soil_cov,
            &self.beta,
            &self.landuse,
            &self.soil_evap_fact,
            &self.trans_fact,
            &self.soilm_scp,
            &self.soilm_pwp,
        )
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn validate_static_grids(
    shape: Shape,
    int_cap: &Grid,
    soil_cov: &Grid,
    beta: &Grid,
    landuse: &LandUseGrid,
    soil_evap_fact: &Grid,
    trans_fact: &Grid,
    soilm_scp: &Grid,
    soilm_pwp: &Grid,
) -> Result<()> {
    ensure_shape("int_cap", int_cap, shape)?;
    ensure_shape("soil_cov", soil_cov, shape)?;
    ensure_shape("beta", beta, shape)?;
    ensure_shape("landuse", landuse, shape)?;
    ensure_shape("soil_evap_fact", soil_evap_fact, shape)?;
    ensure_shape("trans_fact", trans_fact, shape)?;
    ensure_shape("soilm_scp", soilm_scp, shape)?;
    ensure_shape("soilm_pwp", soilm_pwp, shape)?;

    ensure_within("int_cap", int_cap, INT_CAP_BOUNDS)?;
    ensure_within("soil_cov", soil_cov, SOIL_COV_BOUNDS)?;
    ensure_within("beta", beta, BETA_BOUNDS)?;
    ensure_within("soil_evap_fact", soil_evap_fact, SOIL_EVAP_FACT_BOUNDS)?;
    ensure_within("trans_fact", trans_fact, TRANS_FACT_BOUNDS)?;
    ensure_within("soilm_scp", soilm_scp, SOILM_BOUNDS)?;
    ensure_within("soilm_pwp", soilm_pwp, SOILM_BOUNDS)?;
    ensure_ordered("soilm_scp", soilm_scp, soilm_pwp)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FluxError;

    fn uniform(shape: Shape) -> StaticGrids {
        StaticGrids {
            int_cap: Grid::from_elem(shape, 1.0),
            soil_cov: Grid::from_elem(shape, 0.7),
            beta: Grid::from_elem(shape, 1.75),
            landuse: LandUseGrid::from_elem(shape, 1),
            soil_evap_fact: Grid::from_elem(shape, 1.0),
            trans_fact: Grid::from_elem(shape, 1.0),
            soilm_scp: Grid::from_elem(shape, 40.0),
            soilm_pwp: Grid::from_elem(shape, 100.0),
        }
    }

    #[test]
    fn valid_grids() {
        let g = uniform((3, 2));
        assert!(g.validate().is_ok());
        assert_eq!(g.shape(), (3, 2));
    }

    #[test]
    fn shape_from_landuse() {
        let mut g = uniform((3, 2));
        g.landuse = LandUseGrid::zeros((2, 2));
        assert!(matches!(
            g.validate(),
            Err(FluxError::ShapeMismatch { name: "int_cap", .. })
        ));
    }

    #[test]
    fn negative_soil_cover_rejected() {
        let mut g = uniform((2, 2));
        g.soil_cov[[0, 1]] = -0.1;
        assert!(matches!(
            g.validate(),
            Err(FluxError::OutOfRangeParameter { name: "soil_cov", .. })
        ));
    }

    #[test]
    fn soil_cover_above_one_rejected() {
        let mut g = uniform((2, 2));
        g.soil_cov[[1, 0]] = 1.01;
        assert!(g.validate().is_err());
    }

    #[test]
    fn non_positive_beta_rejected() {
        let mut g = uniform((2, 2));
        g.beta[[0, 0]] = 0.0;
        assert!(matches!(
            g.validate(),
            Err(FluxError::OutOfRangeParameter { name: "beta", .. })
        ));
    }

    #[test]
    fn stress_threshold_above_wilting_point_rejected() {
        let mut g = uniform((2, 2));
        g.soilm_scp[[1, 1]] = 120.0;
        assert!(matches!(
            g.validate(),
            Err(FluxError::OutOfRangeParameter { name: "soilm_scp", row: 1, col: 1, .. })
        ));
    }

    #[test]
    fn nodata_cells_pass_validation() {
        let mut g = uniform((2, 2));
        g.beta[[0, 0]] = f64::NAN;
        g.soil_cov[[1, 1]] = f64::NAN;
        assert!(g.validate().is_ok());
    }

    #[test]
    fn new_validates() {
        let g = uniform((2, 2));
        let mut beta = g.beta.clone();
        beta[[0, 0]] = -1.0;
        let r = StaticGrids::new(
            g.int_cap, g.soil_cov, beta, g.landuse, g.soil_evap_fact, g.trans_fact, g.soilm_scp,
            g.soilm_pwp,
        );
        assert!(r.is_err());
    }
}
