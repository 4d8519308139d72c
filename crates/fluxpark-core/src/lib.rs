/// fluxpark-core: per-timestep water balance flux composition on grids.
///
/// Three per-cell process models (canopy interception, Boesten-Stroosnijder
/// soil evaporation, a root-zone reservoir) composed into 21 output grids
/// and the state carried to the next timestep.
pub mod compositor;
pub mod config;
pub mod error;
pub mod forcing;
pub mod grid;
pub mod interception;
pub mod soil_evaporation;
pub mod traits;
pub mod unsaturated_zone;

pub use compositor::{
    compute_fluxes, compute_fluxes_with_smda, Compositor, FluxGrids, ProcessRegistry,
    SimulationState, StaticGrids,
};
pub use config::{CompositorConfig, OutputSelection, ReservoirDemand};
pub use error::{FluxError, Result};
pub use forcing::ForcingGrids;
