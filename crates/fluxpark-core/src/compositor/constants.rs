//! Flux composition constants.
//!
//! Land-use codes and open-water multipliers on reference evapotranspiration.

/// Land-use code of the main open-water class.
pub const OPEN_WATER_CODE: i32 = 16;

/// Open-water evaporation factor for [`OPEN_WATER_CODE`] [-].
pub const OPEN_WATER_FACTOR: f64 = 1.25;

/// Land-use code of the second open-water class.
pub const SHALLOW_WATER_CODE: i32 = 8;

/// Open-water evaporation factor for [`SHALLOW_WATER_CODE`] [-].
pub const SHALLOW_WATER_FACTOR: f64 = 1.10;
