/// Unsaturated-zone reservoir.
///
/// A single root-zone bucket tracked as a moisture deficit below field
/// capacity. `soilm_scp` is the deficit at which water stress begins,
/// `soilm_pwp` the deficit at wilting point (the full available water).
/// Uptake runs at the demand while the deficit is below `soilm_scp` and
/// falls linearly to zero at `soilm_pwp`. Water beyond a zero deficit
/// leaves the bucket as precipitation surplus.
pub mod constants;
pub mod fluxes;
pub mod processes;
pub mod run;

pub use run::BucketReservoir;
