/// Soil evaporation parameter bounds.
use crate::grid::Bounds;

/// Depletion shape parameter `beta` [mm^0.5]; must be strictly positive.
pub const BETA_BOUNDS: Bounds = Bounds::POSITIVE;

/// Soil evaporation potential factor [-].
pub const SOIL_EVAP_FACT_BOUNDS: Bounds = Bounds::NON_NEGATIVE;

/// Cumulative potential and actual evaporation [mm].
pub const SUM_BOUNDS: Bounds = Bounds::NON_NEGATIVE;
