/// Compositor orchestration.
///
/// - `compose_cell()`: one cell-timestep through every process
/// - `Compositor::step()`: one timestep over the grid
/// - `Compositor::run()`: sequential timesteps with output selection
/// - `compute_fluxes()`: flat boundary over borrowed grids
use rayon::prelude::*;
use tracing::{debug, debug_span, info};

use super::fluxes::{CellFluxes, FluxGrids};
use super::landuse::LandUseClass;
use super::params::{validate_static_grids, StaticGrids};
use super::processes::{self, EvaporationTerms};
use super::registry::ProcessRegistry;
use super::state::{validate_state_grids, CellState, SimulationState};
use crate::config::{CompositorConfig, OutputSelection, ReservoirDemand};
use crate::error::Result;
use crate::forcing::{validate_forcing_grids, ForcingGrids};
use crate::grid::{ensure_ordered, ensure_shape, Grid, LandUseGrid, Shape};
use crate::interception::fluxes::InterceptionFluxes;
use crate::soil_evaporation::fluxes::SoilEvaporationFluxes;
use crate::unsaturated_zone::fluxes::ReservoirFluxes;

/// Forcing and static parameters of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellInputs {
    pub mak: f64,
    pub rain: f64,
    pub int_cap: f64,
    pub soil_cov: f64,
    pub beta: f64,
    pub landuse: i32,
    pub soil_evap_fact: f64,
    pub trans_fact: f64,
    pub soilm_scp: f64,
    pub soilm_pwp: f64,
}

impl CellInputs {
    pub fn is_nodata(&self) -> bool {
        [
            self.mak,
            self.rain,
            self.int_cap,
            self.soil_cov,
            self.beta,
            self.soil_evap_fact,
            self.trans_fact,
            self.soilm_scp,
            self.soilm_pwp,
        ]
        .iter()
        .any(|v| v.is_nan())
    }
}

/// Execute one cell-timestep.
///
/// No-data cells skip the process models, whose outputs become NaN; the
/// totals then sum only the terms that are still defined.
///
/// Returns (new_state, fluxes).
pub fn compose_cell(
    registry: &ProcessRegistry,
    config: &CompositorConfig,
    inputs: &CellInputs,
    state: &CellState,
) -> (CellState, CellFluxes) {
    let CellInputs {
        mak,
        rain,
        int_cap,
        soil_cov,
        beta,
        landuse,
        soil_evap_fact,
        trans_fact,
        soilm_scp,
        soilm_pwp,
    } = *inputs;
    let class = LandUseClass::from_code(landuse);
    let nodata = inputs.is_nodata() || state.is_nodata();

    // 1. Interception
    let canopy = if nodata {
        InterceptionFluxes::NODATA
    } else {
        let demand = processes::interception_demand(mak, int_cap, config.interception_demand_factor);
        registry
            .interception()
            .step(demand, rain, int_cap, soil_cov, state.int_store)
    };

    // 2. Soil evaporation estimate
    let soil_evap_pot = processes::soil_evaporation_potential(mak, soil_cov, soil_evap_fact);
    let soil = if nodata {
        SoilEvaporationFluxes::NODATA
    } else {
        registry.soil_evaporation().step(
            canopy.throughfall,
            soil_evap_pot,
            beta,
            state.sum_ep,
            state.sum_ea,
        )
    };

    // 3. Root-zone uptake
    let trans_pot = processes::transpiration_potential(mak, soil_cov);
    let reservoir = if nodata {
        ReservoirFluxes::NODATA
    } else {
        let transpiration = match config.reservoir_demand {
            ReservoirDemand::SoilEvaporationPlusCover => trans_pot,
            ReservoirDemand::CropTranspiration => {
                processes::crop_transpiration(mak, trans_fact, soil_cov, canopy.wet_fraction)
                    .min(trans_pot)
            }
        };
        registry.unsaturated_zone().step(
            canopy.throughfall,
            soil.evaporation + transpiration,
            state.smda,
            soilm_scp,
            soilm_pwp,
        )
    };

    // 4. Split evapotranspiration
    let eta_trans_frac = processes::transpiration_fraction(trans_pot, soil.evaporation);
    let (trans_act, soil_evap_act) =
        processes::split_evapotranspiration(reservoir.eta, eta_trans_frac);

    // 5. Open water and totals
    let open_water = processes::open_water_evaporation(mak, class);
    let potential = EvaporationTerms {
        soil: soil.evaporation,
        transpiration: trans_pot,
        interception: canopy.evaporation,
        open_water,
    };
    let actual = EvaporationTerms {
        soil: soil_evap_act,
        transpiration: trans_act,
        ..potential
    };

    let new_state = CellState {
        int_store: canopy.store,
        sum_ep: soil.sum_ep,
        sum_ea: soil.sum_ea,
        smda: reservoir.smda,
    };

    let fluxes = CellFluxes {
        int_evap: canopy.evaporation,
        int_store: canopy.store,
        throughfall: canopy.throughfall,
        int_timefrac: canopy.wet_fraction,
        soil_evap_act_est: soil.evaporation,
        sum_ep: soil.sum_ep,
        sum_ea: soil.sum_ea,
        eta: reservoir.eta,
        smdp: reservoir.smdp,
        smda: reservoir.smda,
        prec_surplus: reservoir.prec_surplus,
        eta_trans_frac,
        trans_pot,
        trans_act,
        soil_evap_act,
        open_water_evap_act: open_water,
        trans_def: trans_pot - trans_act,
        evap_total_act: actual.total(class),
        evap_total_pot: potential.total(class),
        soilm_root: soilm_pwp - reservoir.smda,
        prec_def_knmi: processes::precipitation_deficit(rain, mak),
    };

    (new_state, fluxes)
}

/// Map `compose_cell` over every cell in row-major order and gather fresh
/// grids. Cells are independent, so the parallel and sequential paths give
/// identical results.
fn compose_grids<F>(
    registry: &ProcessRegistry,
    config: &CompositorConfig,
    shape: Shape,
    cell_at: F,
) -> (SimulationState, FluxGrids)
where
    F: Fn(usize, usize) -> (CellInputs, CellState) + Sync,
{
    let (rows, cols) = shape;
    let compose = |i: usize| {
        let (inputs, state) = cell_at(i / cols, i % cols);
        compose_cell(registry, config, &inputs, &state)
    };

    let cells: Vec<(CellState, CellFluxes)> = if config.parallel {
        (0..rows * cols).into_par_iter().map(compose).collect()
    } else {
        (0..rows * cols).map(compose).collect()
    };
    let (states, fluxes): (Vec<CellState>, Vec<CellFluxes>) = cells.into_iter().unzip();

    (
        SimulationState::from_cells(shape, &states),
        FluxGrids::from_cells(shape, &fluxes),
    )
}

/// Timestep driver over validated static grids.
///
/// Borrows the process registry; the configuration and static grids are
/// fixed for the lifetime of the compositor.
#[derive(Debug)]
pub struct Compositor<'r> {
    registry: &'r ProcessRegistry,
    config: CompositorConfig,
    statics: StaticGrids,
}

/// Selected outputs of every step, and the state after the last step.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    pub outputs: Vec<Vec<(&'static str, Grid)>>,
    pub final_state: SimulationState,
}

impl<'r> Compositor<'r> {
    pub fn new(
        registry: &'r ProcessRegistry,
        config: CompositorConfig,
        statics: StaticGrids,
    ) -> Result<Self> {
        config.validate()?;
        statics.validate()?;
        Ok(Self {
            registry,
            config,
            statics,
        })
    }

    pub fn shape(&self) -> Shape {
        self.statics.shape()
    }

    pub fn config(&self) -> &CompositorConfig {
        &self.config
    }

    pub fn registry(&self) -> &ProcessRegistry {
        self.registry
    }

    /// Execute one timestep.
    ///
    /// `state` is borrowed and left untouched; the successor state and the
    /// outputs are freshly allocated.
    ///
    /// Returns (new_state, fluxes).
    pub fn step(
        &self,
        state: &SimulationState,
        forcing: &ForcingGrids,
    ) -> Result<(SimulationState, FluxGrids)> {
        let shape = self.shape();
        state.validate(shape)?;
        forcing.validate(shape)?;
        ensure_ordered("smda", &state.smda, &self.statics.soilm_pwp)?;

        let s = &self.statics;
        Ok(compose_grids(self.registry, &self.config, shape, |r, c| {
            let inputs = CellInputs {
                mak: forcing.mak[[r, c]],
                rain: forcing.rain[[r, c]],
                int_cap: s.int_cap[[r, c]],
                soil_cov: s.soil_cov[[r, c]],
                beta: s.beta[[r, c]],
                landuse: s.landuse[[r, c]],
                soil_evap_fact: s.soil_evap_fact[[r, c]],
                trans_fact: s.trans_fact[[r, c]],
                soilm_scp: s.soilm_scp[[r, c]],
                soilm_pwp: s.soilm_pwp[[r, c]],
            };
            (inputs, state.cell((r, c)))
        }))
    }

    /// Execute `forcing.len()` timesteps starting from `initial`, keeping the
    /// selected outputs of every step.
    pub fn run(
        &self,
        initial: &SimulationState,
        forcing: &[ForcingGrids],
        selection: &OutputSelection,
    ) -> Result<RunOutput> {
        let (rows, cols) = self.shape();
        let span = debug_span!("run", steps = forcing.len(), rows, cols);
        let _enter = span.enter();

        let mut outputs = Vec::with_capacity(forcing.len());
        let mut state: Option<SimulationState> = None;
        for (t, f) in forcing.iter().enumerate() {
            let current = state.as_ref().unwrap_or(initial);
            let (next, grids) = self.step(current, f)?;
            debug!(step = t, nodata_cells = count_nodata(&next), "step composed");
            outputs.push(selection.select(grids));
            state = Some(next);
        }

        info!(
            steps = forcing.len(),
            outputs = selection.names().len(),
            "run complete"
        );
        Ok(RunOutput {
            outputs,
            final_state: state.unwrap_or_else(|| initial.clone()),
        })
    }
}

fn count_nodata(state: &SimulationState) -> usize {
    state.smda.iter().filter(|v| v.is_nan()).count()
}

/// Compose one timestep from borrowed grids with the default models and
/// configuration.
///
/// The root zone starts the step at field capacity (zero deficit); use
/// [`compute_fluxes_with_smda`] to carry a deficit between calls.
/// `eta_trans_frac` is only checked for shape; a fresh fraction grid is
/// returned with the other outputs. The domain shape is taken from
/// `landuse_map`.
#[allow(clippy::too_many_arguments)]
pub fn compute_fluxes(
    mak: &Grid,
    rain: &Grid,
    int_cap: &Grid,
    soil_cov: &Grid,
    old_int_store: &Grid,
    beta: &Grid,
    old_sum_ep: &Grid,
    old_sum_ea: &Grid,
    landuse_map: &LandUseGrid,
    soil_evap_fact: &Grid,
    trans_fact: &Grid,
    eta_trans_frac: &Grid,
    soilm_scp: &Grid,
    soilm_pwp: &Grid,
) -> Result<FluxGrids> {
    let old_smda = Grid::zeros(landuse_map.dim());
    compute_fluxes_with_smda(
        mak,
        rain,
        int_cap,
        soil_cov,
        old_int_store,
        beta,
        old_sum_ep,
        old_sum_ea,
        landuse_map,
        soil_evap_fact,
        trans_fact,
        eta_trans_frac,
        soilm_scp,
        soilm_pwp,
        &old_smda,
    )
}

/// [`compute_fluxes`] with the root-zone deficit of the previous step.
#[allow(clippy::too_many_arguments)]
pub fn compute_fluxes_with_smda(
    mak: &Grid,
    rain: &Grid,
    int_cap: &Grid,
    soil_cov: &Grid,
    old_int_store: &Grid,
    beta: &Grid,
    old_sum_ep: &Grid,
    old_sum_ea: &Grid,
    landuse_map: &LandUseGrid,
    soil_evap_fact: &Grid,
    trans_fact: &Grid,
    eta_trans_frac: &Grid,
    soilm_scp: &Grid,
    soilm_pwp: &Grid,
    old_smda: &Grid,
) -> Result<FluxGrids> {
    let shape = landuse_map.dim();
    validate_forcing_grids(shape, mak, rain)?;
    validate_static_grids(
        shape,
        int_cap,
        soil_cov,
        beta,
        landuse_map,
        soil_evap_fact,
        trans_fact,
        soilm_scp,
        soilm_pwp,
    )?;
    validate_state_grids(shape, old_int_store, old_sum_ep, old_sum_ea, old_smda)?;
    ensure_ordered("smda", old_smda, soilm_pwp)?;
    ensure_shape("eta_trans_frac", eta_trans_frac, shape)?;

    let registry = ProcessRegistry::default();
    let config = CompositorConfig::default();
    let (_, fluxes) = compose_grids(&registry, &config, shape, |r, c| {
        let inputs = CellInputs {
            mak: mak[[r, c]],
            rain: rain[[r, c]],
            int_cap: int_cap[[r, c]],
            soil_cov: soil_cov[[r, c]],
            beta: beta[[r, c]],
            landuse: landuse_map[[r, c]],
            soil_evap_fact: soil_evap_fact[[r, c]],
            trans_fact: trans_fact[[r, c]],
            soilm_scp: soilm_scp[[r, c]],
            soilm_pwp: soilm_pwp[[r, c]],
        };
        let state = CellState {
            int_store: old_int_store[[r, c]],
            sum_ep: old_sum_ep[[r, c]],
            sum_ea: old_sum_ea[[r, c]],
            smda: old_smda[[r, c]],
        };
        (inputs, state)
    });
    Ok(fluxes)
}
