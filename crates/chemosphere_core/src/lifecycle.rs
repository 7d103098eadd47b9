//! Seed data construction and organism creation.
//!
//! The seed list, regions, and starting conditions are fixed; starting
//! populations and everything about a speciated organism are drawn from the
//! injected RNG so a fixed seed reproduces them exactly.

use crate::config::SpeciationConfig;
use chemosphere_data::{
    Organism, PathwayKind, PathwayMix, PlanetaryConditions, PopulationTable, RegionKind,
    SpeciesKind, TrophicLevel, MAX_POPULATION,
};
use rand::Rng;

/// A speciated organism together with its starting population.
#[derive(Debug, Clone)]
pub struct SpeciationOutcome {
    pub organism: Organism,
    pub population: u32,
}

/// The fixed seed list of organisms present at initialization.
#[must_use]
pub fn seed_organisms() -> Vec<Organism> {
    vec![
        Organism {
            name: "HydroThermus".to_string(),
            species: SpeciesKind::HydroThermus,
            region: RegionKind::VolcanicOases,
            prey: Vec::new(),
            energy_value: 10.0,
            pathways: PathwayMix::new(80.0, 20.0, 0.0),
        },
        Organism {
            name: "MethanoBubbler".to_string(),
            species: SpeciesKind::MethanoBubbler,
            region: RegionKind::TwilightZone,
            prey: Vec::new(),
            energy_value: 15.0,
            pathways: PathwayMix::new(10.0, 90.0, 0.0),
        },
        Organism {
            name: "OxyNox".to_string(),
            species: SpeciesKind::OxyNox,
            region: RegionKind::AbyssalPlains,
            prey: vec!["HydroThermus".to_string()],
            energy_value: 25.0,
            pathways: PathwayMix::new(20.0, 20.0, 60.0),
        },
        Organism {
            name: "AbyssalSiphon".to_string(),
            species: SpeciesKind::AbyssalSiphon,
            region: RegionKind::AbyssalPlains,
            prey: vec!["MethanoBubbler".to_string()],
            energy_value: 30.0,
            pathways: PathwayMix::new(40.0, 30.0, 30.0),
        },
        Organism {
            name: "TwilightHunter".to_string(),
            species: SpeciesKind::TwilightHunter,
            region: RegionKind::TwilightZone,
            prey: vec!["OxyNox".to_string(), "AbyssalSiphon".to_string()],
            energy_value: 100.0,
            pathways: PathwayMix::new(0.0, 30.0, 70.0),
        },
        Organism {
            name: "VentCrawler".to_string(),
            species: SpeciesKind::VentCrawler,
            region: RegionKind::VolcanicOases,
            prey: vec!["HydroThermus".to_string(), "MethanoBubbler".to_string()],
            energy_value: 500.0,
            pathways: PathwayMix::new(20.0, 50.0, 30.0),
        },
        Organism {
            name: "ChemoSludge".to_string(),
            species: SpeciesKind::ChemoSludge,
            region: RegionKind::AbyssalPlains,
            prey: vec!["HydroThermus".to_string(), "OxyNox".to_string()],
            energy_value: 5.0,
            pathways: PathwayMix::new(30.0, 20.0, 50.0),
        },
    ]
}

/// Draws a starting population for one trophic level.
///
/// Producers seed high (`[MAX/2, MAX)`), consumers moderate (`[0, MAX/4)`),
/// apex predators low (`[0, MAX/10)`), decomposers moderate (`[0, MAX/5)`).
fn starting_population(level: TrophicLevel, rng: &mut impl Rng) -> u32 {
    match level {
        TrophicLevel::Producer => rng.gen_range(MAX_POPULATION / 2..MAX_POPULATION),
        TrophicLevel::Consumer => rng.gen_range(0..MAX_POPULATION / 4),
        TrophicLevel::ApexPredator => rng.gen_range(0..MAX_POPULATION / 10),
        TrophicLevel::Decomposer => rng.gen_range(0..MAX_POPULATION / 5),
    }
}

/// Builds the starting population table for the given organisms.
#[must_use]
pub fn seed_populations(organisms: &[Organism], rng: &mut impl Rng) -> PopulationTable {
    organisms
        .iter()
        .map(|organism| {
            (
                organism.name.clone(),
                starting_population(organism.trophic_level(), rng),
            )
        })
        .collect()
}

/// The complete fixed-plus-seeded starting state of the simulation.
#[must_use]
pub fn initial_state(
    rng: &mut impl Rng,
) -> (Vec<Organism>, PopulationTable, PlanetaryConditions) {
    let organisms = seed_organisms();
    let populations = seed_populations(&organisms, rng);
    (organisms, populations, PlanetaryConditions::default())
}

/// Picks an `Evolved###` name not already used by any organism.
///
/// Collisions probe upward from the drawn index so the result stays a pure
/// function of the RNG stream and the existing name set.
fn unique_name(populations: &PopulationTable, organisms: &[Organism], rng: &mut impl Rng) -> String {
    let mut index: u32 = rng.gen_range(0..1000);
    loop {
        let candidate = format!("Evolved{}", index);
        let taken = populations.contains_key(&candidate)
            || organisms.iter().any(|o| o.name == candidate);
        if !taken {
            return candidate;
        }
        index += 1;
    }
}

/// Creates a random organism for speciation: random species, region, and
/// prey subset, with a pathway mix normalized to sum to 100.
#[must_use]
pub fn create_random_organism(
    organisms: &[Organism],
    populations: &PopulationTable,
    cfg: &SpeciationConfig,
    rng: &mut impl Rng,
) -> SpeciationOutcome {
    let species = SpeciesKind::ALL[rng.gen_range(0..SpeciesKind::ALL.len())];
    let region = RegionKind::ALL[rng.gen_range(0..RegionKind::ALL.len())];
    let name = unique_name(populations, organisms, rng);

    let mut pathways = PathwayMix::new(0.0, 0.0, 0.0);
    for pathway in PathwayKind::ALL {
        pathways.set(pathway, f64::from(rng.gen_range(0..100u32)));
    }
    pathways.renormalize();

    let prey: Vec<String> = organisms
        .iter()
        .filter(|_| rng.gen::<f64>() < cfg.prey_chance)
        .map(|organism| organism.name.clone())
        .collect();

    let energy_value = cfg.min_energy_value + (rng.gen::<f64>() * cfg.energy_value_span).floor();
    let population = rng.gen_range(0..MAX_POPULATION / 10);

    SpeciationOutcome {
        organism: Organism {
            name,
            species,
            region,
            prey,
            energy_value,
            pathways,
        },
        population,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_seed_list_matches_species_identity() {
        let organisms = seed_organisms();
        assert_eq!(organisms.len(), 7);
        for organism in &organisms {
            assert_eq!(organism.name, organism.species.name());
            assert!((organism.pathways.sum() - 100.0).abs() < 1e-9);
            assert!(organism.energy_value > 0.0);
        }
    }

    #[test]
    fn test_seed_prey_names_resolve() {
        let organisms = seed_organisms();
        for organism in &organisms {
            for prey in &organism.prey {
                assert!(organisms.iter().any(|o| &o.name == prey));
            }
        }
    }

    #[test]
    fn test_producers_seed_larger_than_apex_predators() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let organisms = seed_organisms();
        let populations = seed_populations(&organisms, &mut rng);
        let producer_min = organisms
            .iter()
            .filter(|o| o.trophic_level() == TrophicLevel::Producer)
            .map(|o| populations[&o.name])
            .min()
            .unwrap();
        let apex_max = organisms
            .iter()
            .filter(|o| o.trophic_level() == TrophicLevel::ApexPredator)
            .map(|o| populations[&o.name])
            .max()
            .unwrap();
        assert!(producer_min >= MAX_POPULATION / 2);
        assert!(apex_max < MAX_POPULATION / 10);
    }

    #[test]
    fn test_random_organism_is_reproducible() {
        let organisms = seed_organisms();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let populations: PopulationTable =
            organisms.iter().map(|o| (o.name.clone(), 100)).collect();
        let cfg = SpeciationConfig::default();
        let first = create_random_organism(&organisms, &populations, &cfg, &mut rng);

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let second = create_random_organism(&organisms, &populations, &cfg, &mut rng);

        assert_eq!(first.organism, second.organism);
        assert_eq!(first.population, second.population);
        assert!((first.organism.pathways.sum() - 100.0).abs() < 1e-9);
        assert!(first.organism.name.starts_with("Evolved"));
    }

    #[test]
    fn test_unique_name_probes_past_collision() {
        let organisms = seed_organisms();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let cfg = SpeciationConfig::default();
        let mut populations: PopulationTable =
            organisms.iter().map(|o| (o.name.clone(), 100)).collect();
        let first = create_random_organism(&organisms, &populations, &cfg, &mut rng);
        populations.insert(first.organism.name.clone(), first.population);

        // Re-running the same stream must step past the now-taken name.
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let second = create_random_organism(&organisms, &populations, &cfg, &mut rng);
        assert_ne!(first.organism.name, second.organism.name);
    }
}
