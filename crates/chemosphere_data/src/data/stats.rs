use super::conditions::PlanetaryConditions;
use super::organism::PopulationTable;
use serde::{Deserialize, Serialize};

/// Aggregated macro-level statistics for the whole ecosystem, recomputed
/// once per tick for display layers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EcosystemStats {
    /// Tick the statistics were captured at.
    pub tick: u64,
    /// Number of organism records (live populations plus floor-dwellers).
    pub organism_count: usize,
    /// Number of distinct species archetypes present.
    pub species_count: usize,
    /// Sum of all population counts.
    pub total_population: u64,
    /// Population biomass of producer-level organisms.
    pub biomass_producer: u64,
    /// Population biomass of consumer-level organisms.
    pub biomass_consumer: u64,
    /// Population biomass of apex predators.
    pub biomass_apex: u64,
    /// Population biomass of decomposers.
    pub biomass_decomposer: u64,
    /// Total ecosystem energy: Σ organism_energy × population.
    pub total_energy: f64,
    /// Global resource-pressure scalar in [0.05, 1].
    pub resource_pressure: f64,
}

/// Tagged union of the events emitted during a tick.
///
/// Serialised with `#[serde(tag = "event")]` for streaming consumption by
/// the display collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum LiveEvent {
    /// A new organism emerged via stochastic speciation.
    Speciation {
        name: String,
        species: String,
        region: String,
        population: u32,
        tick: u64,
        timestamp: String,
    },
    /// Ecological stability alert (e.g. every population at the floor).
    EcoAlert {
        message: String,
        tick: u64,
        timestamp: String,
    },
    /// Periodic macro-state snapshot for history browsing.
    Snapshot {
        tick: u64,
        stats: EcosystemStats,
        timestamp: String,
    },
}

/// One generation's full recorded state, kept by the in-memory history for
/// population and condition charting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSnapshot {
    pub tick: u64,
    pub populations: PopulationTable,
    pub conditions: PlanetaryConditions,
    pub total_energy: f64,
}
