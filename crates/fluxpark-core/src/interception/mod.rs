/// Canopy interception.
///
/// A single bucket per cell whose capacity scales with soil cover. Rain
/// falling on the covered fraction fills the bucket, the wet canopy
/// evaporates at the interception demand, the rest passes as throughfall.
pub mod constants;
pub mod fluxes;
pub mod processes;
pub mod run;

pub use run::Voortman;
