/// Validated forcing grids for one timestep.
///
/// Both grids must share one shape. Negative values are rejected; NaN
/// marks a no-data cell and is accepted.
use crate::error::Result;
use crate::grid::{ensure_shape, ensure_within, Bounds, Grid, Shape};

/// Reference evapotranspiration and precipitation [mm].
#[derive(Debug, Clone, PartialEq)]
pub struct ForcingGrids {
    /// Makkink reference evapotranspiration.
    pub mak: Grid,
    pub rain: Grid,
}

impl ForcingGrids {
    /// Create new ForcingGrids with validation.
    pub fn new(mak: Grid, rain: Grid) -> Result<Self> {
        let forcing = Self { mak, rain };
        forcing.validate(forcing.mak.dim())?;
        Ok(forcing)
    }

    /// Same value in every cell.
    pub fn uniform(shape: Shape, mak: f64, rain: f64) -> Result<Self> {
        Self::new(Grid::from_elem(shape, mak), Grid::from_elem(shape, rain))
    }

    pub fn shape(&self) -> Shape {
        self.mak.dim()
    }

    pub fn validate(&self, shape: Shape) -> Result<()> {
        validate_forcing_grids(shape, &self.mak, &self.rain)
    }
}

pub(crate) fn validate_forcing_grids(shape: Shape, mak: &Grid, rain: &Grid) -> Result<()> {
    ensure_shape("mak", mak, shape)?;
    ensure_shape("rain", rain, shape)?;
    ensure_within("mak", mak, Bounds::NON_NEGATIVE)?;
    ensure_within("rain", rain, Bounds::NON_NEGATIVE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FluxError;

    #[test]
    fn valid_forcing() {
        let f = ForcingGrids::uniform((4, 3), 1.0, 3.0).unwrap();
        assert_eq!(f.shape(), (4, 3));
    }

    #[test]
    fn rejects_shape_mismatch() {
        let f = ForcingGrids::new(Grid::zeros((2, 2)), Grid::zeros((2, 3)));
        assert!(matches!(f, Err(FluxError::ShapeMismatch { name: "rain", .. })));
    }

    #[test]
    fn rejects_negative_rain() {
        let f = ForcingGrids::uniform((2, 2), 1.0, -0.5);
        assert!(matches!(
            f,
            Err(FluxError::OutOfRangeParameter { name: "rain", .. })
        ));
    }

    #[test]
    fn accepts_nodata() {
        let mut mak = Grid::from_elem((2, 2), 1.0);
        mak[[0, 0]] = f64::NAN;
        assert!(ForcingGrids::new(mak, Grid::zeros((2, 2))).is_ok());
    }
}
