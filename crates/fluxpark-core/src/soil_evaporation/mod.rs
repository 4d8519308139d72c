/// Bare-soil evaporation after Boesten and Stroosnijder.
///
/// Stage-one evaporation runs at the potential rate until the cumulative
/// potential evaporation since the last wetting exceeds `beta²`; beyond that
/// the cumulative actual evaporation follows `beta * sqrt(sum_ep)`. Net
/// wetting shrinks the cumulative sums instead of resetting them outright.
pub mod constants;
pub mod fluxes;
pub mod processes;
pub mod run;

pub use run::BoestenStroosnijder;
