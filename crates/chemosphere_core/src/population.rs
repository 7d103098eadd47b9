//! The generational population step: logistic growth bounded by carrying
//! capacity, trophic coupling, decomposer recycling, and stochastic pathway
//! mutation.
//!
//! `step` is pure: it takes the full pre-tick state and returns the full
//! post-tick state. Every organism reads the same pre-tick population
//! snapshot, so there is no ordering dependency within a tick.

use crate::config::{GrowthConfig, MutationConfig, SimConfig, SpeciationConfig};
use crate::energy::organism_energy;
use crate::habitability::habitability;
use crate::lifecycle::{self, SpeciationOutcome};
use chemosphere_data::{
    Organism, PathwayKind, PathwayMix, PlanetaryConditions, PopulationTable, TrophicLevel,
    MAX_POPULATION, MIN_POPULATION,
};
use rand::Rng;

/// Carrying-capacity composition: fixed base, habitability share, resource
/// share. The three sum to 1 so capacity peaks at `MAX_POPULATION`.
const CAPACITY_BASE: f64 = 0.35;
const CAPACITY_HABITABILITY_WEIGHT: f64 = 0.45;
const CAPACITY_RESOURCE_WEIGHT: f64 = 0.2;

/// Resource-pressure composition and floor.
const MINERAL_WEIGHT: f64 = 0.8;
const OXYGEN_WEIGHT: f64 = 0.2;
const RESOURCE_PRESSURE_FLOOR: f64 = 0.05;

/// Nominal dissolved-oxygen saturation (mg/L) used for normalization.
const OXYGEN_NOMINAL_MAX: f64 = 8.0;

/// Result of one generational step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// The organism set with post-mutation pathway mixes.
    pub organisms: Vec<Organism>,
    /// The post-tick population table.
    pub populations: PopulationTable,
}

/// Global scalar in [0.05, 1] summarizing mineral and oxygen scarcity.
#[must_use]
pub fn resource_pressure(conditions: &PlanetaryConditions) -> f64 {
    let mineral_availability = conditions.minerals.average() / 100.0;
    let oxygen_availability = (conditions.dissolved_oxygen / OXYGEN_NOMINAL_MAX).clamp(0.0, 1.0);
    (mineral_availability * MINERAL_WEIGHT + oxygen_availability * OXYGEN_WEIGHT)
        .clamp(RESOURCE_PRESSURE_FLOOR, 1.0)
}

/// Perturbs each pathway percentage independently with probability
/// `cfg.rate`, then renormalizes the mix to sum to 100.
#[must_use]
pub fn mutate_pathways(
    mix: &PathwayMix,
    cfg: &MutationConfig,
    rng: &mut impl Rng,
) -> PathwayMix {
    let mut next = *mix;
    for pathway in PathwayKind::ALL {
        if cfg.amount > 0.0 && rng.gen::<f64>() < cfg.rate {
            let perturbation = rng.gen_range(-cfg.amount..cfg.amount);
            next.set(pathway, next.get(pathway) + perturbation);
        }
    }
    next.renormalize();
    next
}

/// Advances every population by one generation.
///
/// Prey lookups and the decomposer biomass term read the pre-tick
/// `populations` snapshot. Organisms referencing prey names missing from the
/// table contribute zero, never fault.
#[must_use]
pub fn step(
    organisms: &[Organism],
    populations: &PopulationTable,
    conditions: &PlanetaryConditions,
    config: &SimConfig,
    rng: &mut impl Rng,
) -> StepOutcome {
    let mutated: Vec<Organism> = organisms
        .iter()
        .map(|organism| {
            let mut next = organism.clone();
            next.pathways = mutate_pathways(&organism.pathways, &config.mutation, rng);
            next
        })
        .collect();

    let pressure = resource_pressure(conditions);
    let total_biomass: u64 = populations.values().map(|&p| u64::from(p)).sum();

    let mut next_populations = populations.clone();
    for organism in &mutated {
        let current = populations
            .get(&organism.name)
            .copied()
            .unwrap_or(MIN_POPULATION);
        let updated = step_organism(
            organism,
            current,
            populations,
            total_biomass,
            conditions,
            pressure,
            &config.growth,
        );
        next_populations.insert(organism.name.clone(), updated);
    }

    StepOutcome {
        organisms: mutated,
        populations: next_populations,
    }
}

fn step_organism(
    organism: &Organism,
    current: u32,
    snapshot: &PopulationTable,
    total_biomass: u64,
    conditions: &PlanetaryConditions,
    pressure: f64,
    cfg: &GrowthConfig,
) -> u32 {
    let energy = organism_energy(organism, conditions).max(cfg.energy_floor);
    let fitness = habitability(organism, conditions);
    let population = f64::from(current);

    let carrying_capacity = f64::from(MAX_POPULATION)
        * (CAPACITY_BASE
            + fitness * CAPACITY_HABITABILITY_WEIGHT
            + pressure * CAPACITY_RESOURCE_WEIGHT);
    let growth_potential = (energy / cfg.growth_divisor) * fitness * pressure;
    let logistic_limiter = (1.0 - population / carrying_capacity.max(1.0)).clamp(-1.0, 1.0);

    let mut delta = population * growth_potential * logistic_limiter;

    if organism.trophic_level().preys() {
        let prey_population: f64 = organism
            .prey
            .iter()
            .map(|name| f64::from(snapshot.get(name).copied().unwrap_or(0)))
            .sum();
        let prey_support = prey_population * cfg.energy_transfer_efficiency;
        // +1 keeps the ratio finite when every prey population is at the floor
        let predation_stress = (population / (prey_population + 1.0)).clamp(0.0, 2.0);
        delta += (prey_support - population) * cfg.prey_support_rate;
        delta -= population * predation_stress * cfg.predation_stress_rate;
    }

    if organism.trophic_level() == TrophicLevel::Decomposer {
        delta +=
            (total_biomass as f64 / f64::from(MAX_POPULATION)) * cfg.decomposer_recycling;
    }

    let environmental_stress = (1.0 - fitness) * cfg.stress_factor;
    let stressed = population + delta - population * environmental_stress;
    stressed
        .round()
        .clamp(f64::from(MIN_POPULATION), f64::from(MAX_POPULATION)) as u32
}

/// Rolls the speciation chance and, on success, creates a new organism with
/// a unique name, normalized random pathway mix, and random prey subset.
#[must_use]
pub fn maybe_speciate(
    organisms: &[Organism],
    populations: &PopulationTable,
    chance: f64,
    cfg: &SpeciationConfig,
    rng: &mut impl Rng,
) -> Option<SpeciationOutcome> {
    if rng.gen::<f64>() >= chance {
        return None;
    }
    Some(lifecycle::create_random_organism(
        organisms,
        populations,
        cfg,
        rng,
    ))
}
