/// Unsaturated-zone parameter bounds.
use crate::grid::Bounds;

/// Deficit at the stress threshold and at wilting point [mm].
pub const SOILM_BOUNDS: Bounds = Bounds::NON_NEGATIVE;

/// Root-zone moisture deficit state [mm].
pub const SMDA_BOUNDS: Bounds = Bounds::NON_NEGATIVE;

/// Transpiration potential factor [-].
pub const TRANS_FACT_BOUNDS: Bounds = Bounds::NON_NEGATIVE;
