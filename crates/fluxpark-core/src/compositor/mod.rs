/// Flux composition for one timestep.
///
/// Sequences interception, soil evaporation and the unsaturated-zone
/// reservoir per cell, then splits evapotranspiration, adds open-water
/// evaporation and derives totals, root-zone moisture and the reference
/// precipitation deficit.
pub mod constants;
pub mod fluxes;
pub mod landuse;
pub mod params;
pub mod processes;
pub mod registry;
pub mod run;
pub mod state;

pub use fluxes::{CellFluxes, FluxGrids};
pub use landuse::LandUseClass;
pub use params::StaticGrids;
pub use registry::{Process, ProcessRegistry};
pub use run::{
    compose_cell, compute_fluxes, compute_fluxes_with_smda, CellInputs, Compositor, RunOutput,
};
pub use state::{CellState, SimulationState};
