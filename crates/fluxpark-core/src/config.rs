/// Compositor configuration and output selection.
///
/// Loading these from files belongs to the caller; this module only holds
/// validated values.
use crate::compositor::fluxes::FluxGrids;
use crate::error::{FluxError, Result};
use crate::grid::Grid;
use crate::interception::constants::WET_CANOPY_DEMAND_FACTOR;

/// Evaporation demand routed into the unsaturated-zone reservoir.
///
/// Both variants add the soil evaporation estimate; they differ in the
/// transpiration term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReservoirDemand {
    /// `soil_evap_act_est + mak * soil_cov`.
    #[default]
    SoilEvaporationPlusCover,
    /// `soil_evap_act_est + mak * trans_fact * soil_cov * (1 - int_timefrac)`:
    /// crop-factor transpiration, suppressed while the canopy is wet and
    /// capped at `mak * soil_cov`.
    CropTranspiration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompositorConfig {
    /// Multiplier on `mak` for the wet-canopy interception demand.
    pub interception_demand_factor: f64,
    pub reservoir_demand: ReservoirDemand,
    /// Map cells on the rayon thread pool.
    pub parallel: bool,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            interception_demand_factor: WET_CANOPY_DEMAND_FACTOR,
            reservoir_demand: ReservoirDemand::default(),
            parallel: true,
        }
    }
}

impl CompositorConfig {
    pub fn new(
        interception_demand_factor: f64,
        reservoir_demand: ReservoirDemand,
        parallel: bool,
    ) -> Result<Self> {
        let config = Self {
            interception_demand_factor,
            reservoir_demand,
            parallel,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let f = self.interception_demand_factor;
        if !f.is_finite() || f < 0.0 {
            return Err(FluxError::InvalidConfig {
                name: "interception_demand_factor",
                value: f,
            });
        }
        Ok(())
    }
}

/// Names of the output grids a run keeps, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSelection {
    names: Vec<&'static str>,
}

impl OutputSelection {
    /// Every output grid.
    pub fn all() -> Self {
        Self {
            names: FluxGrids::field_names().to_vec(),
        }
    }

    /// Select outputs by name. Unknown names are rejected; duplicates are
    /// dropped and the result follows output order.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut wanted = Vec::new();
        for name in names {
            let name = name.as_ref();
            match FluxGrids::field_names().iter().find(|&&known| known == name) {
                Some(&known) => wanted.push(known),
                None => return Err(FluxError::UnknownOutput(name.to_string())),
            }
        }
        let names = FluxGrids::field_names()
            .iter()
            .copied()
            .filter(|n| wanted.contains(n))
            .collect();
        Ok(Self { names })
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Move the selected grids out of `grids`.
    pub fn select(&self, grids: FluxGrids) -> Vec<(&'static str, Grid)> {
        grids
            .into_named()
            .into_iter()
            .filter(|(name, _)| self.names.contains(name))
            .collect()
    }
}

impl Default for OutputSelection {
    fn default() -> Self {
        Self::all()
    }
}
