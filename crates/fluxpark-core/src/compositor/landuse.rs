/// Land-use classification.
///
/// Only the open-water classes change the composition; every other code is
/// ordinary land and keeps its code for reference.
use super::constants::{OPEN_WATER_CODE, OPEN_WATER_FACTOR, SHALLOW_WATER_CODE, SHALLOW_WATER_FACTOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandUseClass {
    /// Open water, evaporating at 1.25 × reference evapotranspiration.
    OpenWater,
    /// Second open-water class, evaporating at 1.10 × reference evapotranspiration.
    ShallowWater,
    /// Vegetated or bare land with its original code.
    Land(i32),
}

impl LandUseClass {
    /// Classify a land-use code. Unknown codes are land.
    pub const fn from_code(code: i32) -> Self {
        match code {
            OPEN_WATER_CODE => LandUseClass::OpenWater,
            SHALLOW_WATER_CODE => LandUseClass::ShallowWater,
            other => LandUseClass::Land(other),
        }
    }

    /// Multiplier on reference evapotranspiration, `None` for land.
    pub const fn open_water_factor(self) -> Option<f64> {
        match self {
            LandUseClass::OpenWater => Some(OPEN_WATER_FACTOR),
            LandUseClass::ShallowWater => Some(SHALLOW_WATER_FACTOR),
            LandUseClass::Land(_) => None,
        }
    }

    pub const fn is_open_water(self) -> bool {
        self.open_water_factor().is_some()
    }
}

impl From<i32> for LandUseClass {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_codes_classified() {
        assert_eq!(LandUseClass::from_code(16), LandUseClass::OpenWater);
        assert_eq!(LandUseClass::from_code(8), LandUseClass::ShallowWater);
    }

    #[test]
    fn unknown_codes_are_land() {
        for code in [-9999, 0, 1, 7, 9, 15, 17, 42] {
            let class = LandUseClass::from(code);
            assert_eq!(class, LandUseClass::Land(code));
            assert!(!class.is_open_water());
            assert_eq!(class.open_water_factor(), None);
        }
    }

    #[test]
    fn factors() {
        assert_eq!(LandUseClass::OpenWater.open_water_factor(), Some(1.25));
        assert_eq!(LandUseClass::ShallowWater.open_water_factor(), Some(1.10));
    }
}
