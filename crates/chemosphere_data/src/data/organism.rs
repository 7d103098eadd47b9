use super::pathway::PathwayMix;
use super::region::RegionKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping organism-name → population count, bounded to
/// [`super::conditions::MIN_POPULATION`, `super::conditions::MAX_POPULATION`].
///
/// One entry per live organism; entries are added at speciation and never
/// removed.
pub type PopulationTable = HashMap<String, u32>;

/// An organism's position in the food web, selecting which growth and
/// decline terms apply during a generational step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrophicLevel {
    Producer,
    Consumer,
    ApexPredator,
    Decomposer,
}

impl TrophicLevel {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TrophicLevel::Producer => "Producer",
            TrophicLevel::Consumer => "Consumer",
            TrophicLevel::ApexPredator => "Apex Predator",
            TrophicLevel::Decomposer => "Decomposer",
        }
    }

    /// True for levels that depend on prey populations.
    #[must_use]
    pub fn preys(&self) -> bool {
        matches!(self, TrophicLevel::Consumer | TrophicLevel::ApexPredator)
    }
}

/// The closed set of species archetypes an organism can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeciesKind {
    HydroThermus,
    MethanoBubbler,
    OxyNox,
    AbyssalSiphon,
    TwilightHunter,
    VentCrawler,
    ChemoSludge,
}

impl SpeciesKind {
    pub const ALL: [SpeciesKind; 7] = [
        SpeciesKind::HydroThermus,
        SpeciesKind::MethanoBubbler,
        SpeciesKind::OxyNox,
        SpeciesKind::AbyssalSiphon,
        SpeciesKind::TwilightHunter,
        SpeciesKind::VentCrawler,
        SpeciesKind::ChemoSludge,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SpeciesKind::HydroThermus => "HydroThermus",
            SpeciesKind::MethanoBubbler => "MethanoBubbler",
            SpeciesKind::OxyNox => "OxyNox",
            SpeciesKind::AbyssalSiphon => "AbyssalSiphon",
            SpeciesKind::TwilightHunter => "TwilightHunter",
            SpeciesKind::VentCrawler => "VentCrawler",
            SpeciesKind::ChemoSludge => "ChemoSludge",
        }
    }

    /// Taxonomic kingdom, display only.
    #[must_use]
    pub fn kingdom(&self) -> &'static str {
        match self {
            SpeciesKind::HydroThermus => "Archaea",
            SpeciesKind::MethanoBubbler
            | SpeciesKind::OxyNox
            | SpeciesKind::ChemoSludge => "Bacteria",
            SpeciesKind::AbyssalSiphon
            | SpeciesKind::TwilightHunter
            | SpeciesKind::VentCrawler => "Animalia",
        }
    }

    #[must_use]
    pub fn trophic_level(&self) -> TrophicLevel {
        match self {
            SpeciesKind::HydroThermus | SpeciesKind::MethanoBubbler => TrophicLevel::Producer,
            SpeciesKind::OxyNox | SpeciesKind::AbyssalSiphon | SpeciesKind::VentCrawler => {
                TrophicLevel::Consumer
            }
            SpeciesKind::TwilightHunter => TrophicLevel::ApexPredator,
            SpeciesKind::ChemoSludge => TrophicLevel::Decomposer,
        }
    }

    /// Inclusive temperature tolerance range in °C.
    #[must_use]
    pub fn temperature_range(&self) -> (f64, f64) {
        match self {
            SpeciesKind::HydroThermus => (60.0, 110.0),
            SpeciesKind::MethanoBubbler => (0.0, 70.0),
            SpeciesKind::OxyNox => (2.0, 40.0),
            SpeciesKind::AbyssalSiphon => (0.0, 20.0),
            SpeciesKind::TwilightHunter => (0.0, 20.0),
            SpeciesKind::VentCrawler => (2.0, 35.0),
            SpeciesKind::ChemoSludge => (0.0, 120.0),
        }
    }
}

/// A living population record in the ecosystem.
///
/// Identity is the unique `name`, stable from creation onward. Records are
/// created from the seed list or via speciation and are never deleted; a
/// collapsed population simply sits at the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    pub name: String,
    pub species: SpeciesKind,
    pub region: RegionKind,
    /// Names of the organisms this one feeds on; empty for producers and
    /// allowed to reference names missing from the population table (such
    /// entries contribute zero).
    pub prey: Vec<String>,
    /// Positive base energy scalar multiplied through the pathway mix.
    pub energy_value: f64,
    pub pathways: PathwayMix,
}

impl Organism {
    #[must_use]
    pub fn trophic_level(&self) -> TrophicLevel {
        self.species.trophic_level()
    }
}
