/// Process registry.
///
/// Maps each `Process` to the model implementing it. Built once before a run
/// and borrowed by the compositor for every step.
use std::fmt;

use crate::interception::Voortman;
use crate::soil_evaporation::BoestenStroosnijder;
use crate::traits::{InterceptionModel, SoilEvaporationModel, UnsaturatedZoneModel};
use crate::unsaturated_zone::BucketReservoir;

/// The physical processes sequenced by the compositor, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Process {
    Interception,
    SoilEvaporation,
    UnsaturatedZone,
}

impl Process {
    pub const ALL: [Process; 3] = [
        Process::Interception,
        Process::SoilEvaporation,
        Process::UnsaturatedZone,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Process::Interception => "interception",
            Process::SoilEvaporation => "soil_evaporation",
            Process::UnsaturatedZone => "unsaturated_zone",
        }
    }
}

pub struct ProcessRegistry {
    interception: Box<dyn InterceptionModel>,
    soil_evaporation: Box<dyn SoilEvaporationModel>,
    unsaturated_zone: Box<dyn UnsaturatedZoneModel>,
}

impl ProcessRegistry {
    pub fn new(
        interception: Box<dyn InterceptionModel>,
        soil_evaporation: Box<dyn SoilEvaporationModel>,
        unsaturated_zone: Box<dyn UnsaturatedZoneModel>,
    ) -> Self {
        Self {
            interception,
            soil_evaporation,
            unsaturated_zone,
        }
    }

    pub fn interception(&self) -> &dyn InterceptionModel {
        self.interception.as_ref()
    }

    pub fn soil_evaporation(&self) -> &dyn SoilEvaporationModel {
        self.soil_evaporation.as_ref()
    }

    pub fn unsaturated_zone(&self) -> &dyn UnsaturatedZoneModel {
        self.unsaturated_zone.as_ref()
    }

    /// Identifier of the model registered for `process`.
    pub fn model_name(&self, process: Process) -> &'static str {
        match process {
            Process::Interception => self.interception.name(),
            Process::SoilEvaporation => self.soil_evaporation.name(),
            Process::UnsaturatedZone => self.unsaturated_zone.name(),
        }
    }

    /// `(process, model)` pairs in call order.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        Process::ALL
            .iter()
            .map(|&p| (p.name(), self.model_name(p)))
            .collect()
    }
}

impl Default for ProcessRegistry {
    fn default() -> Self {
        Self::new(
            Box::new(Voortman),
            Box::new(BoestenStroosnijder),
            Box::new(BucketReservoir),
        )
    }
}

impl fmt::Debug for ProcessRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}
