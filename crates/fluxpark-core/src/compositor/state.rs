/// Persisted state carried between timesteps.
///
/// `SimulationState` is a value: each step borrows the previous state and
/// returns a freshly allocated successor, never mutating its input.
use fluxpark_macros::GridFields;

use crate::error::Result;
use crate::grid::{ensure_shape, ensure_within, Grid, Shape};
use crate::interception::constants::INT_STORE_BOUNDS;
use crate::soil_evaporation::constants::SUM_BOUNDS;
use crate::unsaturated_zone::constants::SMDA_BOUNDS;

/// State of one cell.
#[derive(Debug, Clone, Copy, PartialEq, GridFields)]
#[grid(name = "SimulationState")]
pub struct CellState {
    /// Interception storage [mm].
    pub int_store: f64,
    /// Cumulative potential soil evaporation [mm].
    pub sum_ep: f64,
    /// Cumulative actual soil evaporation [mm].
    pub sum_ea: f64,
    /// Root-zone moisture deficit [mm].
    pub smda: f64,
}

impl CellState {
    pub const ZERO: CellState = CellState {
        int_store: 0.0,
        sum_ep: 0.0,
        sum_ea: 0.0,
        smda: 0.0,
    };

    pub fn is_nodata(&self) -> bool {
        self.int_store.is_nan() || self.sum_ep.is_nan() || self.sum_ea.is_nan() || self.smda.is_nan()
    }
}

impl SimulationState {
    /// All stores empty and the root zone at field capacity.
    pub fn zeros(shape: Shape) -> Self {
        Self::uniform(shape, &CellState::ZERO)
    }

    /// Build from caller-owned grids, typically a spin-up result.
    pub fn from_grids(int_store: Grid, sum_ep: Grid, sum_ea: Grid, smda: Grid) -> Result<Self> {
        let state = Self {
            int_store,
            sum_ep,
            sum_ea,
            smda,
        };
        state.validate(state.int_store.dim())?;
        Ok(state)
    }

    /// Check every grid against `shape` and its bounds.
    pub fn validate(&self, shape: Shape) -> Result<()> {
        validate_state_grids(shape, &self.int_store, &self.sum_ep, &self.sum_ea, &self.smda)
    }
}

pub(crate) fn validate_state_grids(
    shape: Shape,
    int_store: &Grid,
    sum_ep: &Grid,
    sum_ea: &Grid,
    smda: &Grid,
) -> Result<()> {
    ensure_shape("int_store", int_store, shape)?;
    ensure_shape("sum_ep", sum_ep, shape)?;
    ensure_shape("sum_ea", sum_ea, shape)?;
    ensure_shape("smda", smda, shape)?;

    ensure_within("int_store", int_store, INT_STORE_BOUNDS)?;
    ensure_within("sum_ep", sum_ep, SUM_BOUNDS)?;
    ensure_within("sum_ea", sum_ea, SUM_BOUNDS)?;
    ensure_within("smda", smda, SMDA_BOUNDS)?;
    Ok(())
}
