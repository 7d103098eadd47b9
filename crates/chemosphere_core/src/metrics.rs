//! Aggregate ecosystem metrics for reporting.
//!
//! Read-only computations over the current state plus structured logging
//! for monitoring long runs.

use crate::energy::organism_energy;
use crate::population::resource_pressure;
use chemosphere_data::{
    EcosystemStats, Organism, PlanetaryConditions, PopulationTable, TrophicLevel,
};

/// Total ecosystem energy: Σ `organism_energy × population`.
///
/// Purely derived; organisms missing from the table count as zero.
#[must_use]
pub fn total_ecosystem_energy(
    organisms: &[Organism],
    populations: &PopulationTable,
    conditions: &PlanetaryConditions,
) -> f64 {
    organisms
        .iter()
        .map(|organism| {
            let population = populations.get(&organism.name).copied().unwrap_or(0);
            organism_energy(organism, conditions) * f64::from(population)
        })
        .sum()
}

/// Captures the macro statistics of the current state for display layers.
#[must_use]
pub fn ecosystem_stats(
    tick: u64,
    organisms: &[Organism],
    populations: &PopulationTable,
    conditions: &PlanetaryConditions,
) -> EcosystemStats {
    let mut stats = EcosystemStats {
        tick,
        organism_count: organisms.len(),
        total_energy: total_ecosystem_energy(organisms, populations, conditions),
        resource_pressure: resource_pressure(conditions),
        ..EcosystemStats::default()
    };

    let mut species = std::collections::HashSet::new();
    for organism in organisms {
        species.insert(organism.species);
        let population = u64::from(populations.get(&organism.name).copied().unwrap_or(0));
        stats.total_population += population;
        match organism.trophic_level() {
            TrophicLevel::Producer => stats.biomass_producer += population,
            TrophicLevel::Consumer => stats.biomass_consumer += population,
            TrophicLevel::ApexPredator => stats.biomass_apex += population,
            TrophicLevel::Decomposer => stats.biomass_decomposer += population,
        }
    }
    stats.species_count = species.len();
    stats
}

/// Emits one structured log line for a generation snapshot.
pub fn log_generation(stats: &EcosystemStats) {
    tracing::info!(
        tick = stats.tick,
        organisms = stats.organism_count,
        population = stats.total_population,
        total_energy = stats.total_energy,
        resource_pressure = stats.resource_pressure,
        "Generation snapshot"
    );
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
