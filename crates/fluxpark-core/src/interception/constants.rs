/// Interception constants and parameter bounds.
use crate::grid::Bounds;

/// Multiplier on reference evapotranspiration giving the evaporative demand
/// of a wet canopy.
pub const WET_CANOPY_DEMAND_FACTOR: f64 = 1.25;

/// Interception capacity of full cover [mm].
pub const INT_CAP_BOUNDS: Bounds = Bounds::NON_NEGATIVE;

/// Soil cover fraction [-].
pub const SOIL_COV_BOUNDS: Bounds = Bounds::FRACTION;

/// Interception storage [mm].
pub const INT_STORE_BOUNDS: Bounds = Bounds::NON_NEGATIVE;
